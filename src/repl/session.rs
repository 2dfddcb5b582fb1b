use console::style;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use tracing::{debug, info};

use crate::errors::IdeafyError;
use crate::models::IdeaSubmission;
use crate::repl::commands::{self, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::repl::progress::FetchSpinner;
use crate::repl::renderer;
use crate::viewer::renderer::{render_report, render_view};
use crate::viewer::{ReportClient, Tab, ViewerState};

/// Terminal dashboard for one idea: fetches its report and lets the user
/// move between sections.
pub struct ViewerSession {
    client: ReportClient,
    state: ViewerState,
}

impl ViewerSession {
    pub fn new(client: ReportClient, idea: Option<IdeaSubmission>) -> Self {
        Self {
            client,
            state: ViewerState::new(idea),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn select(&mut self, tab: Tab) {
        self.state.set_tab(tab);
    }

    /// Submit the idea (again, when regenerating) and record the outcome in
    /// the viewer state. Does nothing when there is no idea. The error is
    /// also handed back so callers can choose an exit code.
    pub async fn fetch(&mut self) -> Result<(), IdeafyError> {
        let Some(idea) = self.state.begin_fetch() else {
            debug!("No idea to submit");
            return Ok(());
        };

        let spinner = FetchSpinner::start(&idea.business_name);
        match self.client.fetch_report(&idea).await {
            Ok(raw) => {
                let elapsed_ms = spinner.finish_ok();
                info!(business = %idea.business_name, elapsed_ms, "Report received");
                self.state.load(raw, elapsed_ms);
                Ok(())
            }
            Err(e) => {
                let elapsed_ms = spinner.finish_err();
                self.state.fail(e.to_string());
                debug!(elapsed_ms, "Fetch failed");
                Err(e)
            }
        }
    }

    /// What the dashboard shows right now: the selected section once loaded,
    /// otherwise the loading/failure/no-idea message.
    pub fn render_current(&self) -> String {
        match self.state.current_view() {
            Some(view) => format!("{}{}", renderer::render_header(&self.state), render_view(view)),
            None => renderer::render_phase(self.state.phase()),
        }
    }

    pub fn render_all(&self) -> String {
        match self.state.report() {
            Some(report) => format!("{}{}", renderer::render_header(&self.state), render_report(report)),
            None => renderer::render_phase(self.state.phase()),
        }
    }

    /// Run the interactive loop until `/exit`, Ctrl-C or EOF.
    pub async fn run(mut self) -> Result<(), IdeafyError> {
        println!("{}", self.render_current());
        println!("{}", renderer::render_info("Type /help for commands, /next and /prev to move between tabs."));

        let config = Config::builder().auto_add_history(true).build();
        let mut editor = Editor::with_config(config)
            .map_err(|e| IdeafyError::Internal(format!("Failed to initialize viewer: {}", e)))?;
        editor.set_helper(Some(ReplHelper));

        loop {
            let readline = {
                // rustyline is blocking, so use spawn_blocking
                let result = tokio::task::spawn_blocking(move || {
                    let term_w = console::Term::stdout().size().1 as usize;
                    let sep = format!("{}", style("─".repeat(term_w)).dim());
                    let prompt = format!("{}\n{} ", sep, style("ideafy>").cyan().bold());
                    let result = editor.readline(&prompt);
                    (editor, result)
                })
                .await
                .map_err(|e| IdeafyError::Internal(format!("Readline task failed: {}", e)))?;

                editor = result.0;
                result.1
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match commands::parse_command(trimmed) {
                        Ok(cmd) => {
                            if self.handle_command(cmd).await {
                                break;
                            }
                        }
                        Err(msg) => println!("{}", renderer::render_error(&msg)),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!("{}", renderer::render_error(&format!("Input error: {}", err)));
                    break;
                }
            }
        }

        println!("{}", renderer::render_info("Goodbye."));
        Ok(())
    }

    /// Apply one command. Returns true when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Exit => return true,
            SlashCommand::Clear => print!("\x1B[2J\x1B[1;1H"),
            SlashCommand::Tab { name } => {
                match name.trim().parse::<usize>() {
                    Ok(n) if (1..=Tab::ALL.len()).contains(&n) => self.state.set_tab(Tab::ALL[n - 1]),
                    _ => {
                        let tab = self.state.select_tab(&name);
                        if Tab::parse(&name).is_none() {
                            println!(
                                "{}",
                                renderer::render_info(&format!("Unknown tab '{}', showing {}.", name, tab))
                            );
                        }
                    }
                }
                println!("{}", self.render_current());
            }
            SlashCommand::Tabs => println!("{}", renderer::render_tab_list(self.state.selected())),
            SlashCommand::Next => {
                self.state.set_tab(self.state.selected().next());
                println!("{}", self.render_current());
            }
            SlashCommand::Prev => {
                self.state.set_tab(self.state.selected().prev());
                println!("{}", self.render_current());
            }
            SlashCommand::All => println!("{}", self.render_all()),
            SlashCommand::Raw => match self.state.raw() {
                Some(raw) => println!(
                    "{}",
                    serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string())
                ),
                None => println!("{}", renderer::render_phase(self.state.phase())),
            },
            SlashCommand::Regenerate => {
                if self.state.idea().is_none() {
                    println!("{}", renderer::render_phase(self.state.phase()));
                } else {
                    // Failure is already recorded in the state and rendered below.
                    let _ = self.fetch().await;
                    println!("{}", self.render_current());
                }
            }
            SlashCommand::Share => println!("{}", renderer::render_info(&self.state.share())),
            SlashCommand::Version => println!("{}", renderer::render_version()),
            SlashCommand::Help { command } => println!("{}", renderer::render_help(command.as_deref())),
        }
        false
    }
}

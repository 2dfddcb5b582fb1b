use console::style;

use crate::repl::commands::{CommandHelp, COMMAND_HELP};
use crate::utils::formatting::format_duration;
use crate::viewer::renderer::render_nav;
use crate::viewer::{Tab, ViewerPhase, ViewerState};

/// Render the help listing for all commands.
pub fn render_help(specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        return match COMMAND_HELP.iter().find(|c| c.name == cmd_name) {
            Some(cmd) => format_command_detail(cmd),
            None => format!("{} Unknown command: /{}", style("✗").red(), cmd_name),
        };
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Available commands:").white().bold()));
    for cmd in COMMAND_HELP {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out
}

fn format_command_detail(cmd: &CommandHelp) -> String {
    format!(
        "\n{}\n  {}\n\n  {}\n",
        style(format!("/{}", cmd.name)).cyan().bold(),
        style(cmd.description).dim(),
        style(cmd.usage).white(),
    )
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");
    let profile = option_env!("BUILD_PROFILE").unwrap_or("debug");

    format!(
        "\n  {} {}\n  {} {}\n  {} {} ({})\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
        profile,
    )
}

/// Numbered list of tabs with the selected one marked.
pub fn render_tab_list(selected: Tab) -> String {
    let mut out = format!("\n{}\n\n", style("Tabs:").white().bold());
    for tab in Tab::ALL {
        let marker = if tab == selected { style("▶").cyan().bold().to_string() } else { " ".into() };
        out.push_str(&format!(
            "  {} {} {:<26} {}\n",
            marker,
            style(format!("{}.", tab.index() + 1)).dim(),
            tab.display_name(),
            style(format!("/tab {}", tab.slug())).dim(),
        ));
    }
    out
}

/// Header above a rendered section: idea name, nav bar and timing.
pub fn render_header(state: &ViewerState) -> String {
    let name = state.idea().map(|i| i.business_name.as_str()).unwrap_or("Ideafy");
    let timing = match state.phase() {
        ViewerPhase::Loaded { elapsed_ms, .. } => format!(" | generated in {}", format_duration(*elapsed_ms)),
        _ => String::new(),
    };
    format!(
        "\n{} {}\n{}\n",
        style(name).white().bold(),
        style(format!("startup report{}", timing)).dim(),
        render_nav(state.selected()),
    )
}

/// One-line description of a phase that has no report to show.
pub fn render_phase(phase: &ViewerPhase) -> String {
    match phase {
        ViewerPhase::NoIdea => render_info(
            "No idea submitted. Run `ideafy report --name <name>` or pass --idea <file.json>.",
        ),
        ViewerPhase::Loading => render_info("Loading report..."),
        ViewerPhase::Failed { message } => format!(
            "{}\n{}",
            render_error(&format!("Failed to generate report: {}", message)),
            render_info("Use /regenerate to try again."),
        ),
        ViewerPhase::Loaded { .. } => String::new(),
    }
}

pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

pub fn render_info(msg: &str) -> String {
    format!("{}", style(msg).dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).into_owned()
    }

    #[test]
    fn test_help_lists_commands() {
        let out = plain(render_help(None));
        assert!(out.contains("/regenerate"));
        assert!(out.contains("/tab"));
    }

    #[test]
    fn test_help_for_specific_command() {
        assert!(plain(render_help(Some("raw"))).contains("/raw"));
        assert!(plain(render_help(Some("nope"))).contains("Unknown command"));
    }

    #[test]
    fn test_tab_list_marks_selection() {
        let out = plain(render_tab_list(Tab::Recommendations));
        assert!(out.contains("▶ 5. Recommendations"));
        assert!(out.contains("/tab terms"));
    }

    #[test]
    fn test_phase_messages() {
        assert!(plain(render_phase(&ViewerPhase::Loading)).contains("Loading report..."));
        let failed = plain(render_phase(&ViewerPhase::Failed { message: "timeout".into() }));
        assert!(failed.contains("Failed to generate report: timeout"));
    }
}

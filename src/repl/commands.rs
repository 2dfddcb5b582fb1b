/// All slash commands supported by the report viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum SlashCommand {
    /// Switch to a tab by name, slug or 1-based number.
    Tab { name: String },
    Tabs,
    Next,
    Prev,
    All,
    Raw,
    Regenerate,
    Share,
    Version,
    Clear,
    Help { command: Option<String> },
    Exit,
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "tab",
        usage: "/tab <name|number>   e.g. /tab financials, /tab 4",
        description: "Show one section of the report. Unknown names show the Executive Overview.",
    },
    CommandHelp {
        name: "tabs",
        usage: "/tabs",
        description: "List the report tabs",
    },
    CommandHelp {
        name: "next",
        usage: "/next",
        description: "Move to the next tab",
    },
    CommandHelp {
        name: "prev",
        usage: "/prev",
        description: "Move to the previous tab",
    },
    CommandHelp {
        name: "all",
        usage: "/all",
        description: "Print every section of the report",
    },
    CommandHelp {
        name: "raw",
        usage: "/raw",
        description: "Print the report JSON as received from the service",
    },
    CommandHelp {
        name: "regenerate",
        usage: "/regenerate",
        description: "Submit the same idea again and replace the current report",
    },
    CommandHelp {
        name: "share",
        usage: "/share",
        description: "Share the report (reports are not stored, so this only acknowledges)",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the viewer",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/tab",
    "/tabs",
    "/next",
    "/prev",
    "/all",
    "/raw",
    "/regenerate",
    "/share",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

/// Parse a raw input line into a SlashCommand, or return an error message.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err("Commands must start with /. Type /help for available commands.".into());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err("Empty command".into());
    }

    let cmd = parts[0];
    let args = &parts[1..];

    match cmd {
        "/tab" => {
            if args.is_empty() {
                return Err("Usage: /tab <name|number>. Type /tabs to list them.".into());
            }
            Ok(SlashCommand::Tab { name: args.join(" ") })
        }
        "/tabs" => Ok(SlashCommand::Tabs),
        "/next" | "/n" => Ok(SlashCommand::Next),
        "/prev" | "/p" => Ok(SlashCommand::Prev),
        "/all" => Ok(SlashCommand::All),
        "/raw" | "/json" => Ok(SlashCommand::Raw),
        "/regenerate" | "/regen" => Ok(SlashCommand::Regenerate),
        "/share" => Ok(SlashCommand::Share),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!("Unknown command: {}. Type /help for available commands.", other)),
    }
}

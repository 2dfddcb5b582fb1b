use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ideafy", version, about = "AI startup idea validator: report service and terminal dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the report service (HTTP API)
    Serve(ServeArgs),
    /// Submit an idea to a running service and view the report
    Report(ReportArgs),
    /// Print the prompt that would be sent to the model for an idea
    Prompt(PromptArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Default)]
pub struct ServeArgs {
    /// Listen port [default: 5000, or $PORT]
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// LLM provider: gemini, openai, local
    #[arg(long)]
    pub provider: Option<String>,

    /// LLM model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Custom prompt template file
    #[arg(long)]
    pub prompt_template: Option<PathBuf>,
}

/// The idea to evaluate: a JSON file, individual flags, or both (flags win).
#[derive(Args, Clone, Default)]
pub struct IdeaArgs {
    /// JSON file with the idea fields (businessName, industry, ...)
    #[arg(long)]
    pub idea: Option<PathBuf>,

    /// Business name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub industry: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub target_market: Option<String>,

    /// The problem the business solves
    #[arg(long)]
    pub problem: Option<String>,

    #[arg(long)]
    pub unique_value: Option<String>,

    #[arg(long)]
    pub business_model: Option<String>,

    #[arg(long)]
    pub funding: Option<String>,

    #[arg(long)]
    pub timeline: Option<String>,

    /// Founder experience
    #[arg(long)]
    pub experience: Option<String>,
}

#[derive(Args, Clone, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub idea: IdeaArgs,

    /// Report service base URL [default: http://localhost:5000]
    #[arg(long)]
    pub service_url: Option<String>,

    /// Bearer token for the report service
    #[arg(long)]
    pub token: Option<String>,

    /// Print one tab and exit (overview, market, validation, financials, recommendations, terms)
    #[arg(long, conflicts_with_all = ["all", "json"])]
    pub tab: Option<String>,

    /// Print every tab and exit
    #[arg(long, conflicts_with = "json")]
    pub all: bool,

    /// Print the report JSON as received and exit
    #[arg(long)]
    pub json: bool,

    /// Open the interactive dashboard even when output is not a terminal
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args, Clone, Default)]
pub struct PromptArgs {
    #[command(flatten)]
    pub idea: IdeaArgs,

    /// Custom prompt template file
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: PathBuf,
}

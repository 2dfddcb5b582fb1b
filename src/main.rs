use clap::Parser;
use tracing_subscriber::EnvFilter;

use ideafy::cli::{self, Commands};
use ideafy::config::parser::{parse_config, schema_warnings};
use ideafy::errors::IdeafyError;

#[tokio::main]
async fn main() {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: cli::Cli) -> Result<(), IdeafyError> {
    if let Commands::Validate(args) = &cli.command {
        return handle_validate(&args.config).await;
    }

    let config = cli::load_config(cli.config.as_deref()).await?;
    match cli.command {
        Commands::Serve(args) => cli::serve::handle_serve(args, &config).await,
        Commands::Report(args) => cli::report::handle_report(args, &config).await,
        Commands::Prompt(args) => cli::prompt::handle_prompt(args, &config),
        Commands::Validate(_) => Ok(()),
    }
}

async fn handle_validate(path: &std::path::Path) -> Result<(), IdeafyError> {
    let config = parse_config(path).await?;

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
    let warnings = if yaml.is_null() { Vec::new() } else { schema_warnings(&yaml)? };
    for w in &warnings {
        println!("  warning: {}", w);
    }

    let provider = config
        .llm
        .as_ref()
        .and_then(|l| l.provider.as_deref())
        .unwrap_or(ideafy::config::settings::DEFAULT_PROVIDER);
    println!(
        "Configuration is valid: {} (provider: {}, {} warning(s))",
        path.display(),
        provider,
        warnings.len()
    );
    Ok(())
}

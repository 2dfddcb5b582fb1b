use tracing::info;

use crate::cli::commands::ReportArgs;
use crate::cli::input::load_idea;
use crate::config::{IdeafyConfig, ViewerOverrides, ViewerSettings};
use crate::errors::IdeafyError;
use crate::repl::renderer::render_phase;
use crate::repl::ViewerSession;
use crate::viewer::{ReportClient, Tab};

pub async fn handle_report(args: ReportArgs, config: &IdeafyConfig) -> Result<(), IdeafyError> {
    let idea = load_idea(&args.idea)?;
    let overrides = ViewerOverrides {
        service_url: args.service_url.clone(),
        api_token: args.token.clone(),
    };
    let settings = ViewerSettings::resolve(config, &overrides);
    let client = ReportClient::new(&settings)?;
    info!(service = %client.base_url(), "Using report service");

    let interactive = args.interactive
        || (args.tab.is_none() && !args.all && !args.json && console::Term::stdout().is_term());

    let mut session = ViewerSession::new(client, idea);
    let fetched = session.fetch().await;

    if interactive {
        // The dashboard shows the failure and offers /regenerate.
        return session.run().await;
    }

    fetched?;
    let state = session.state();
    let Some(raw) = state.raw() else {
        println!("{}", render_phase(state.phase()));
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(raw)?);
    } else if args.all {
        println!("{}", session.render_all());
    } else {
        if let Some(name) = &args.tab {
            session.select(Tab::from_name(name));
        }
        println!("{}", session.render_current());
    }
    Ok(())
}

use crate::cli::commands::PromptArgs;
use crate::cli::input::load_idea;
use crate::config::IdeafyConfig;
use crate::errors::IdeafyError;
use crate::prompts::PromptTemplate;

/// Print the prompt the service would send for this idea. No model is called.
pub fn handle_prompt(args: PromptArgs, config: &IdeafyConfig) -> Result<(), IdeafyError> {
    let idea = load_idea(&args.idea)?
        .ok_or_else(|| IdeafyError::InvalidSubmission("no idea given; use --idea <file> or --name".into()))?;

    let template_path = args.template.or_else(|| {
        config
            .server
            .as_ref()
            .and_then(|s| s.prompt_template.as_ref())
            .map(Into::into)
    });
    let template = match template_path {
        Some(path) => PromptTemplate::load(&path)?,
        None => PromptTemplate::builtin(),
    };

    print!("{}", template.render(&idea));
    Ok(())
}

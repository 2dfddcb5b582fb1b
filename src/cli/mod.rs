pub mod commands;
pub mod input;
pub mod prompt;
pub mod report;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::Path;

use crate::config::{parse_config, IdeafyConfig};
use crate::errors::IdeafyError;

/// Load `--config` when given; otherwise run on defaults plus environment.
pub async fn load_config(path: Option<&Path>) -> Result<IdeafyConfig, IdeafyError> {
    match path {
        Some(p) => parse_config(p).await,
        None => Ok(IdeafyConfig::default()),
    }
}

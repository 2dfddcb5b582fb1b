pub mod credentials;
pub mod parser;
pub mod schema;
pub mod settings;
pub mod types;

pub use types::*;
pub use parser::parse_config;
pub use settings::{ServeOverrides, ServeSettings, ViewerOverrides, ViewerSettings};

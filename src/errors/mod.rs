pub mod types;
pub mod classification;

pub use types::IdeafyError;
pub use classification::ErrorClassification;

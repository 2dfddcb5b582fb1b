pub mod idea;
pub mod report;

pub use idea::{IdeaSubmission, IDEA_FIELDS};
pub use report::*;

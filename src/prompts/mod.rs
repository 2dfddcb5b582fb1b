pub mod fences;
pub mod loader;

pub use fences::{parse_json_reply, strip_code_fences};
pub use loader::{PromptTemplate, REPORT_SCHEMA};

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod repl;
pub mod service;
pub mod utils;
pub mod viewer;

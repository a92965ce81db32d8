//! Presentation layer for sentibot
//!
//! This crate contains CLI definitions, output formatters
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand, parse_command};
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter, formatter_for};

//! Infrastructure layer for sentibot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the lexicon scoring providers, and
//! configuration file loading.

pub mod config;
pub mod export;
pub mod logging;
pub mod response;
pub mod scoring;
pub mod transcript;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileSentimentConfig, expand_home,
};
pub use export::JsonFileExporter;
pub use logging::JsonlConversationLogger;
pub use response::RandomChooser;
pub use scoring::{LexiconCompoundScorer, PatternPolarityScorer, lexicon_scorer};
pub use transcript::{TranscriptError, load_transcript};

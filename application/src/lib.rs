//! Application layer for sentibot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ChatBehavior, DEFAULT_BOT_NAME};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    sentiment_exporter::{ExportError, SentimentExporter},
};
pub use use_cases::analyze_sentiment::AnalyzeSentimentUseCase;
pub use use_cases::export_analysis::{
    DEFAULT_EXPORT_PATH, ExportAnalysisError, ExportAnalysisOutput, ExportAnalysisUseCase,
};
pub use use_cases::run_chat_turn::{ChatTurnOutput, RunChatTurnUseCase};

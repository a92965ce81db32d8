//! Export Analysis use case.
//!
//! Analyzes the conversation so far and hands the snapshot to a
//! [`SentimentExporter`].

use super::analyze_sentiment::AnalyzeSentimentUseCase;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::sentiment_exporter::{ExportError, SentimentExporter};
use sentibot_domain::{ConversationSentiment, DomainError, TurnLog};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Default export destination.
pub const DEFAULT_EXPORT_PATH: &str = "sentiment_analysis.json";

/// Errors that can occur while exporting.
#[derive(Error, Debug)]
pub enum ExportAnalysisError {
    #[error("Analysis failed: {0}")]
    Analysis(#[from] DomainError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Output of a successful export.
#[derive(Debug, Clone)]
pub struct ExportAnalysisOutput {
    pub path: PathBuf,
    pub analysis: ConversationSentiment,
}

/// Use case for exporting the conversation analysis.
pub struct ExportAnalysisUseCase {
    analyze: AnalyzeSentimentUseCase,
    exporter: Arc<dyn SentimentExporter>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ExportAnalysisUseCase {
    pub fn new(analyze: AnalyzeSentimentUseCase, exporter: Arc<dyn SentimentExporter>) -> Self {
        Self {
            analyze,
            exporter,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Analyze `log` and write the result to `destination`.
    pub fn execute(
        &self,
        log: &impl TurnLog,
        destination: &Path,
    ) -> Result<ExportAnalysisOutput, ExportAnalysisError> {
        let analysis = self.analyze.conversation(log)?;
        let path = self.exporter.export(&analysis, destination)?;

        info!("Exported sentiment analysis to {}", path.display());
        self.conversation_logger.log(ConversationEvent::new(
            "export",
            serde_json::json!({
                "path": path.display().to_string(),
                "total_messages": analysis.total_messages(),
            }),
        ));

        Ok(ExportAnalysisOutput { path, analysis })
    }
}

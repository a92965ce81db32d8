//! Analyze Sentiment use case.
//!
//! Scores a single statement or a whole conversation and records the result
//! on the conversation log.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use sentibot_domain::{
    ConversationAggregator, ConversationSentiment, DomainError, StatementSentiment, TurnLog,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for statement-level and conversation-level analysis.
#[derive(Clone)]
pub struct AnalyzeSentimentUseCase {
    aggregator: ConversationAggregator,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeSentimentUseCase {
    pub fn new(aggregator: ConversationAggregator) -> Self {
        Self {
            aggregator,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Score one statement.
    pub fn statement(&self, text: &str) -> Result<StatementSentiment, DomainError> {
        let result = self.aggregator.scorer().score(text)?;
        self.conversation_logger.log(ConversationEvent::new(
            "statement_sentiment",
            serde_json::json!({
                "label": result.label(),
                "score": result.score(),
                "confidence": result.confidence(),
                "subjectivity": result.secondary_subjectivity(),
            }),
        ));
        Ok(result)
    }

    /// Analyze every human turn of `log`.
    pub fn conversation(
        &self,
        log: &impl TurnLog,
    ) -> Result<ConversationSentiment, DomainError> {
        let turns = log.all_turns();
        info!("Analyzing conversation with {} turns", turns.len());

        let analysis = self.aggregator.aggregate(turns).inspect_err(|e| {
            warn!("Conversation analysis failed: {}", e);
        })?;

        self.conversation_logger.log(ConversationEvent::new(
            "conversation_sentiment",
            serde_json::json!({
                "overall_label": analysis.overall_label(),
                "overall_score": analysis.overall_score(),
                "total_messages": analysis.total_messages(),
                "trend": analysis.trend(),
            }),
        ));

        Ok(analysis)
    }
}

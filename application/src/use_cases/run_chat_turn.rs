//! Run Chat Turn use case.
//!
//! Handles one user message: records it, scores it, picks a canned reply
//! keyed by the statement label and records the reply.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use sentibot_domain::core::text::preview;
use sentibot_domain::{
    Conversation, DomainError, ResponseSelector, SentimentScorer, StatementSentiment,
};
use std::sync::Arc;
use tracing::debug;

/// Result of a single chat turn.
#[derive(Debug, Clone)]
pub struct ChatTurnOutput {
    /// Sentiment of the user's message
    pub sentiment: StatementSentiment,
    /// Reply recorded as the assistant turn
    pub reply: String,
}

/// Use case for answering one user message.
#[derive(Clone)]
pub struct RunChatTurnUseCase {
    scorer: SentimentScorer,
    selector: ResponseSelector,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunChatTurnUseCase {
    pub fn new(scorer: SentimentScorer, selector: ResponseSelector) -> Self {
        Self {
            scorer,
            selector,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Process `input` as the next human turn of `conversation`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidInput`] for blank input; nothing is recorded.
    pub fn execute(
        &self,
        conversation: &mut Conversation,
        input: &str,
    ) -> Result<ChatTurnOutput, DomainError> {
        let sentiment = self.scorer.score(input)?;

        conversation.record_human(input);
        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({
                "text": input,
                "label": sentiment.label(),
                "score": sentiment.score(),
            }),
        ));

        let category = ResponseSelector::categorize(input, Some(sentiment.label()));
        let reply = self.selector.select(input, Some(sentiment.label()));
        debug!(
            category = category.as_str(),
            "Selected reply for: {}",
            preview(input, 40)
        );

        conversation.record_assistant(reply);
        self.conversation_logger.log(ConversationEvent::new(
            "assistant_turn",
            serde_json::json!({
                "text": reply,
                "category": category,
            }),
        ));

        Ok(ChatTurnOutput {
            sentiment,
            reply: reply.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::testing::RecordingLogger;
    use crate::use_cases::testing::aggregator;
    use sentibot_domain::{Author, FirstChoice, ResponseCategory, SentimentLabel, TurnLog};

    fn use_case() -> RunChatTurnUseCase {
        RunChatTurnUseCase::new(
            aggregator().scorer().clone(),
            ResponseSelector::new(Arc::new(FirstChoice)),
        )
    }

    #[test]
    fn test_turn_records_user_and_reply() {
        let mut conv = Conversation::new("bot");
        let output = use_case().execute(&mut conv, "the food was bad").unwrap();

        assert_eq!(output.sentiment.label(), SentimentLabel::Negative);
        assert_eq!(
            output.reply,
            ResponseCategory::NegativeEmpathy.templates()[0]
        );

        let authors: Vec<Author> = conv.all_turns().iter().map(|t| t.author).collect();
        assert_eq!(authors, vec![Author::Human, Author::Assistant]);
        assert_eq!(conv.all_turns()[1].text, output.reply);
    }

    #[test]
    fn test_reply_comes_from_label_bucket() {
        let mut conv = Conversation::new("bot");
        let input = "bad, can you help";
        let output = use_case().execute(&mut conv, input).unwrap();
        let candidates = ResponseSelector::candidates(input, Some(SentimentLabel::Negative));
        assert!(candidates.contains(&output.reply.as_str()));
        assert_eq!(
            ResponseSelector::categorize(input, Some(SentimentLabel::Negative)),
            ResponseCategory::NegativeSupport
        );
    }

    #[test]
    fn test_blank_input_records_nothing() {
        let mut conv = Conversation::new("bot");
        assert!(use_case().execute(&mut conv, "   ").is_err());
        assert!(conv.is_empty());
    }

    #[test]
    fn test_events_are_logged_in_order() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case().with_conversation_logger(logger.clone());
        let mut conv = Conversation::new("bot");
        use_case.execute(&mut conv, "good stuff").unwrap();

        assert_eq!(logger.event_types(), vec!["user_turn", "assistant_turn"]);
        assert_eq!(
            logger.payloads("assistant_turn")[0]["category"],
            "positive_encouragement"
        );
    }
}

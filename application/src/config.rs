//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases
//! behave during an interactive session.

/// Default name the assistant introduces itself with.
pub const DEFAULT_BOT_NAME: &str = "SentimentBot";

/// Chat behavior configuration.
#[derive(Debug, Clone)]
pub struct ChatBehavior {
    /// Name of the assistant party.
    pub bot_name: String,
    /// Display statement-level sentiment after every user message.
    pub show_statement_sentiment: bool,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            show_statement_sentiment: true,
        }
    }
}

impl ChatBehavior {
    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    pub fn with_statement_sentiment(mut self, show: bool) -> Self {
        self.show_statement_sentiment = show;
        self
    }

    /// Flip statement-level display and return the new state.
    pub fn toggle_statement_sentiment(&mut self) -> bool {
        self.show_statement_sentiment = !self.show_statement_sentiment;
        self.show_statement_sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let behavior = ChatBehavior::default();
        assert_eq!(behavior.bot_name, "SentimentBot");
        assert!(behavior.show_statement_sentiment);
    }

    #[test]
    fn test_toggle() {
        let mut behavior = ChatBehavior::default().with_statement_sentiment(false);
        assert!(behavior.toggle_statement_sentiment());
        assert!(!behavior.toggle_statement_sentiment());
    }
}

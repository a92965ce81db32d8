//! Chat configuration from TOML (`[chat]` section)

use sentibot_application::{ChatBehavior, DEFAULT_BOT_NAME};
use sentibot_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Name shown in front of replies
    pub bot_name: String,
    /// Print the sentiment of every message as it is entered
    pub show_statement_sentiment: bool,
    /// Path to the REPL history file
    pub history_file: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            show_statement_sentiment: true,
            history_file: None,
        }
    }
}

impl FileChatConfig {
    /// Convert to [`ChatBehavior`]; an empty bot name falls back to the default.
    pub fn to_behavior(&self) -> (ChatBehavior, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let name = self.bot_name.trim();

        let behavior = if name.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "chat.bot_name".to_string(),
                },
                format!("chat.bot_name is empty, using '{}'", DEFAULT_BOT_NAME),
            ));
            ChatBehavior::default()
        } else {
            ChatBehavior::default().with_bot_name(name)
        };

        (
            behavior.with_statement_sentiment(self.show_statement_sentiment),
            issues,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_behavior() {
        let config = FileChatConfig {
            bot_name: " Ada ".to_string(),
            show_statement_sentiment: false,
            history_file: None,
        };
        let (behavior, issues) = config.to_behavior();
        assert!(issues.is_empty());
        assert_eq!(behavior.bot_name, "Ada");
        assert!(!behavior.show_statement_sentiment);
    }

    #[test]
    fn test_empty_bot_name_warns() {
        let config = FileChatConfig {
            bot_name: "  ".to_string(),
            ..Default::default()
        };
        let (behavior, issues) = config.to_behavior();
        assert_eq!(behavior.bot_name, DEFAULT_BOT_NAME);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;
mod logging;
mod output;
mod sentiment;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use sentiment::FileSentimentConfig;

use sentibot_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Classification thresholds
    pub sentiment: FileSentimentConfig,
    /// Chat loop settings
    pub chat: FileChatConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.sentiment.to_thresholds().1);
        issues.extend(self.chat.to_behavior().1);
        issues.extend(self.output.validate());
        issues
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentibot_domain::{OutputFormat, SentimentThresholds};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[sentiment]
positive_threshold = 0.2
negative_threshold = -0.3
trend_delta = 0.05

[chat]
bot_name = "Ada"
show_statement_sentiment = false
history_file = "~/.local/share/sentibot/history.txt"

[output]
format = "json"
color = false
export_path = "reports/analysis.json"

[logging]
conversation_log = "sentibot.conversation.jsonl"
log_dir = "logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sentiment.positive_threshold, 0.2);
        assert_eq!(config.sentiment.negative_threshold, -0.3);
        assert_eq!(config.chat.bot_name, "Ada");
        assert!(!config.chat.show_statement_sentiment);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.output.export_path(), "reports/analysis.json");
        assert_eq!(config.logging.log_dir.as_deref(), Some("logs"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[sentiment]
trend_delta = 0.2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let thresholds = config.sentiment.to_thresholds().0.unwrap();
        assert_eq!(thresholds.trend_delta(), 0.2);
        assert_eq!(thresholds.positive(), 0.05);
        assert!(config.output.color);
        assert!(config.chat.show_statement_sentiment);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(
            config.sentiment.to_thresholds().0,
            Some(SentimentThresholds::default())
        );
        assert_eq!(config.chat.bot_name, "SentimentBot");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_section() {
        let toml_str = r#"
[sentiment]
positive_threshold = -0.5

[chat]
bot_name = ""

[output]
export_path = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x.jsonl"), home.join("x.jsonl"));
        }
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = FileConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}

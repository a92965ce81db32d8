//! Logging configuration from TOML (`[logging]` section)
//!
//! ```toml
//! [logging]
//! conversation_log = "~/.local/share/sentibot/conversation.jsonl"
//! log_dir = "~/.local/share/sentibot/logs"
//! ```

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation event log; disabled when unset
    pub conversation_log: Option<String>,
    /// Directory for daily-rotated diagnostic logs; disabled when unset
    pub log_dir: Option<String>,
}

//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use sentibot_application::DEFAULT_EXPORT_PATH;
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Path to history file; history is not kept when unset
    pub history_file: Option<PathBuf>,
    /// Destination of a bare `export` command
    pub export_path: PathBuf,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: Self::default_history_file(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl ReplConfig {
    /// `$XDG_DATA_HOME/sentibot/history.txt`
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("sentibot").join("history.txt"))
    }

    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }
}

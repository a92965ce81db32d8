//! Port for exporting a conversation analysis snapshot.

use sentibot_domain::ConversationSentiment;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while writing an export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize analysis: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes a [`ConversationSentiment`] to a named destination.
pub trait SentimentExporter: Send + Sync {
    /// Write the analysis and return the path actually written.
    fn export(
        &self,
        analysis: &ConversationSentiment,
        destination: &Path,
    ) -> Result<PathBuf, ExportError>;
}

//! Transcript files for one-shot conversation analysis.
//!
//! A transcript is a JSON array of turns:
//!
//! ```json
//! [
//!   { "author": "human", "text": "Terrible start" },
//!   { "role": "assistant", "content": "I'm sorry to hear that." }
//! ]
//! ```

use sentibot_domain::Turn;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a transcript.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Failed to read transcript {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid transcript {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON array of turns from `path`.
pub fn load_transcript(path: &Path) -> Result<Vec<Turn>, TranscriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let turns: Vec<Turn> =
        serde_json::from_str(&content).map_err(|source| TranscriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} turns from {}", turns.len(), path.display());
    Ok(turns)
}

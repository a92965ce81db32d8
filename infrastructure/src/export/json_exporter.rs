//! JSON file exporter for conversation analyses.

use sentibot_application::ports::sentiment_exporter::{ExportError, SentimentExporter};
use sentibot_domain::ConversationSentiment;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the analysis as pretty-printed JSON, replacing any existing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileExporter;

impl JsonFileExporter {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentExporter for JsonFileExporter {
    fn export(
        &self,
        analysis: &ConversationSentiment,
        destination: &Path,
    ) -> Result<PathBuf, ExportError> {
        let json = serde_json::to_string_pretty(analysis)?;

        if let Some(parent) = destination.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = json.len();
        std::fs::write(destination, json).map_err(|source| ExportError::Io {
            path: destination.to_path_buf(),
            source,
        })?;

        debug!("Wrote {} bytes to {}", bytes, destination.display());
        Ok(destination.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::lexicon_scorer;
    use sentibot_domain::{ConversationAggregator, SentimentThresholds, Turn};

    fn analysis() -> ConversationSentiment {
        ConversationAggregator::new(lexicon_scorer(SentimentThresholds::default()))
            .aggregate(&[
                Turn::human("Terrible start"),
                Turn::assistant("I'm sorry to hear that."),
                Turn::human("Getting better"),
                Turn::human("Excellent now!"),
            ])
            .unwrap()
    }

    #[test]
    fn test_export_writes_record_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/analysis.json");

        let written = JsonFileExporter::new().export(&analysis(), &path).unwrap();
        assert_eq!(written, path);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        for field in [
            "overall_label",
            "overall_score",
            "total_messages",
            "positive_count",
            "negative_count",
            "neutral_count",
            "average_confidence",
            "trend",
            "per_message_results",
            "label_sequence",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["total_messages"], 3);
        assert_eq!(value["trend"], "Improving");
        assert_eq!(value["per_message_results"].as_array().unwrap().len(), 3);
        assert_eq!(value["per_message_results"][0]["text"], "Terrible start");
    }

    #[test]
    fn test_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        std::fs::write(&path, "stale").unwrap();

        JsonFileExporter::new().export(&analysis(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('{'));
    }

    #[test]
    fn test_export_into_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileExporter::new()
            .export(&analysis(), dir.path())
            .unwrap_err();
        match err {
            ExportError::Io { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Output configuration from TOML (`[output]` section)

use sentibot_application::DEFAULT_EXPORT_PATH;
use sentibot_domain::{ConfigIssue, ConfigIssueCode, OutputFormat};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format for one-shot analysis (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Default destination of the `export` command
    pub export_path: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            export_path: DEFAULT_EXPORT_PATH.to_string(),
        }
    }
}

impl FileOutputConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.export_path.trim().is_empty() {
            return vec![ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "output.export_path".to_string(),
                },
                format!("output.export_path is empty, using '{}'", DEFAULT_EXPORT_PATH),
            )];
        }
        Vec::new()
    }

    /// Export destination with the empty-path fallback applied
    pub fn export_path(&self) -> &str {
        if self.export_path.trim().is_empty() {
            DEFAULT_EXPORT_PATH
        } else {
            &self.export_path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.output.export_path(), DEFAULT_EXPORT_PATH);
    }

    #[test]
    fn test_empty_export_path_falls_back() {
        let config = FileOutputConfig {
            export_path: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 1);
        assert_eq!(config.export_path(), "sentiment_analysis.json");
    }
}

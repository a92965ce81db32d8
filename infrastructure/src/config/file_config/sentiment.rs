//! Sentiment configuration from TOML (`[sentiment]` section)
//!
//! ```toml
//! [sentiment]
//! positive_threshold = 0.05
//! negative_threshold = -0.05
//! trend_delta = 0.1
//! ```

use sentibot_domain::{ConfigIssue, ConfigIssueCode, SentimentThresholds};
use serde::{Deserialize, Serialize};

/// Raw sentiment configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSentimentConfig {
    /// Compound score at or above which a statement is positive
    pub positive_threshold: f64,
    /// Compound score at or below which a statement is negative
    pub negative_threshold: f64,
    /// Minimum change between conversation halves to report a trend
    pub trend_delta: f64,
}

impl Default for FileSentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: SentimentThresholds::DEFAULT_POSITIVE,
            negative_threshold: SentimentThresholds::DEFAULT_NEGATIVE,
            trend_delta: SentimentThresholds::DEFAULT_TREND_DELTA,
        }
    }
}

impl FileSentimentConfig {
    /// Convert to domain thresholds, collecting any issues.
    ///
    /// Returns `None` when the domain rejects the values.
    pub fn to_thresholds(&self) -> (Option<SentimentThresholds>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.positive_threshold > 1.0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnreachableThreshold {
                    field: "sentiment.positive_threshold".to_string(),
                },
                format!(
                    "sentiment.positive_threshold = {} is above 1.0; no statement will be positive",
                    self.positive_threshold
                ),
            ));
        }
        if self.negative_threshold < -1.0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnreachableThreshold {
                    field: "sentiment.negative_threshold".to_string(),
                },
                format!(
                    "sentiment.negative_threshold = {} is below -1.0; no statement will be negative",
                    self.negative_threshold
                ),
            ));
        }

        match SentimentThresholds::new(
            self.positive_threshold,
            self.negative_threshold,
            self.trend_delta,
        ) {
            Ok(thresholds) => (Some(thresholds), issues),
            Err(e) => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidThresholds,
                    format!("[sentiment]: {}", e),
                ));
                (None, issues)
            }
        }
    }
}

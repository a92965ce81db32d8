//! Classification thresholds shared by statement and conversation labeling

use super::label::{SentimentLabel, Trend};
use crate::core::error::DomainError;
use serde::Serialize;

/// Fixed decision boundaries for sentiment classification.
///
/// The same `positive` / `negative` pair labels a single statement and a
/// whole conversation. `trend_delta` is the minimum change between the two
/// halves of a conversation that counts as a trend.
///
/// # Example
///
/// ```
/// use sentibot_domain::sentiment::{SentimentLabel, SentimentThresholds};
///
/// let thresholds = SentimentThresholds::default();
/// assert_eq!(thresholds.classify(0.05), SentimentLabel::Positive);
/// assert_eq!(thresholds.classify(0.0), SentimentLabel::Neutral);
/// assert_eq!(thresholds.classify(-0.05), SentimentLabel::Negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentThresholds {
    positive: f64,
    negative: f64,
    trend_delta: f64,
}

impl SentimentThresholds {
    pub const DEFAULT_POSITIVE: f64 = 0.05;
    pub const DEFAULT_NEGATIVE: f64 = -0.05;
    pub const DEFAULT_TREND_DELTA: f64 = 0.1;

    /// Build a validated set of thresholds.
    ///
    /// Rejects non-finite values, `negative > positive` and a negative
    /// `trend_delta`.
    pub fn new(positive: f64, negative: f64, trend_delta: f64) -> Result<Self, DomainError> {
        if !(positive.is_finite() && negative.is_finite() && trend_delta.is_finite()) {
            return Err(DomainError::InvalidThresholds(
                "thresholds must be finite numbers".to_string(),
            ));
        }
        if negative > positive {
            return Err(DomainError::InvalidThresholds(format!(
                "negative threshold {} is above positive threshold {}",
                negative, positive
            )));
        }
        if trend_delta < 0.0 {
            return Err(DomainError::InvalidThresholds(format!(
                "trend delta {} must not be negative",
                trend_delta
            )));
        }
        Ok(Self {
            positive,
            negative,
            trend_delta,
        })
    }

    pub fn positive(&self) -> f64 {
        self.positive
    }

    pub fn negative(&self) -> f64 {
        self.negative
    }

    pub fn trend_delta(&self) -> f64 {
        self.trend_delta
    }

    /// Label a score. Both boundaries are inclusive; positive wins a tie
    /// when the two thresholds coincide.
    pub fn classify(&self, score: f64) -> SentimentLabel {
        if score >= self.positive {
            SentimentLabel::Positive
        } else if score <= self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Classify the change between the first and second half means.
    /// Both boundaries are exclusive.
    pub fn classify_delta(&self, delta: f64) -> Trend {
        if delta > self.trend_delta {
            Trend::Improving
        } else if delta < -self.trend_delta {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: Self::DEFAULT_POSITIVE,
            negative: Self::DEFAULT_NEGATIVE,
            trend_delta: Self::DEFAULT_TREND_DELTA,
        }
    }
}

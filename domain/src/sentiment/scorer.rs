//! Statement-level sentiment scorer

use super::entities::{CompoundScores, PolarityScores, StatementSentiment};
use super::provider::{CompoundProvider, PolarityProvider};
use super::thresholds::SentimentThresholds;
use crate::core::error::DomainError;
use crate::core::text::{is_blank, preview};
use std::sync::Arc;
use tracing::debug;

/// Scores single statements by merging a compound provider and a
/// polarity provider under fixed thresholds.
#[derive(Clone)]
pub struct SentimentScorer {
    compound: Arc<CompoundProvider>,
    polarity: Arc<PolarityProvider>,
    thresholds: SentimentThresholds,
}

impl SentimentScorer {
    pub fn new(compound: Arc<CompoundProvider>, polarity: Arc<PolarityProvider>) -> Self {
        Self {
            compound,
            polarity,
            thresholds: SentimentThresholds::default(),
        }
    }

    /// Replace the default thresholds
    pub fn with_thresholds(mut self, thresholds: SentimentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &SentimentThresholds {
        &self.thresholds
    }

    /// Score one statement.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidInput`] when `text` is empty or whitespace-only.
    pub fn score(&self, text: &str) -> Result<StatementSentiment, DomainError> {
        if is_blank(text) {
            return Err(DomainError::InvalidInput(
                "text cannot be empty".to_string(),
            ));
        }

        let compound = self.compound.score(text);
        let polarity = self.polarity.score(text);
        let result = merge(text, compound, polarity, &self.thresholds);

        debug!(
            compound_provider = self.compound.name(),
            polarity_provider = self.polarity.name(),
            score = result.score(),
            label = %result.label(),
            "Scored statement: {}",
            preview(text, 60)
        );

        Ok(result)
    }
}

/// Combine raw provider outputs into a [`StatementSentiment`].
///
/// Provider values are clamped into their documented ranges first, so the
/// record's range invariants hold for any provider. Non-finite values
/// count as 0.0.
pub fn merge(
    text: &str,
    compound: CompoundScores,
    polarity: PolarityScores,
    thresholds: &SentimentThresholds,
) -> StatementSentiment {
    let compound = CompoundScores {
        neg: bounded(compound.neg, 0.0, 1.0),
        neu: bounded(compound.neu, 0.0, 1.0),
        pos: bounded(compound.pos, 0.0, 1.0),
        compound: bounded(compound.compound, -1.0, 1.0),
    };
    let polarity = PolarityScores {
        polarity: bounded(polarity.polarity, -1.0, 1.0),
        subjectivity: bounded(polarity.subjectivity, 0.0, 1.0),
    };
    let label = thresholds.classify(compound.compound);

    StatementSentiment::new(text.to_string(), label, compound, polarity)
}

// `f64::clamp` passes NaN through
fn bounded(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        0.0
    }
}

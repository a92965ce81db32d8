//! Lexicon-backed scoring providers.
//!
//! [`LexiconCompoundScorer`] supplies the compound polarity that decides the
//! label; [`PatternPolarityScorer`] supplies the secondary polarity and
//! subjectivity.

mod compound;
mod compound_lexicon;
mod polarity;
mod polarity_lexicon;

pub use compound::LexiconCompoundScorer;
pub use polarity::PatternPolarityScorer;

use sentibot_domain::{SentimentScorer, SentimentThresholds};
use std::sync::Arc;

/// Build a [`SentimentScorer`] wired to the built-in lexicons
pub fn lexicon_scorer(thresholds: SentimentThresholds) -> SentimentScorer {
    SentimentScorer::new(
        Arc::new(LexiconCompoundScorer::new()),
        Arc::new(PatternPolarityScorer::new()),
    )
    .with_thresholds(thresholds)
}

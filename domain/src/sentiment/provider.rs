//! Scoring provider capability
//!
//! A provider turns raw text into primitive scores. The scorer combines one
//! compound provider with one polarity provider; either can be swapped for a
//! different lexicon or a test double.

use super::entities::{CompoundScores, PolarityScores};

/// A pure text scoring strategy.
///
/// Implementations must be deterministic: the same text always produces the
/// same output, with no hidden mutable state.
pub trait ScoringProvider: Send + Sync {
    /// Primitive fields produced by this provider
    type Output;

    /// Identifier used in logs
    fn name(&self) -> &'static str;

    /// Score a non-blank text
    fn score(&self, text: &str) -> Self::Output;
}

/// Provider of compound polarity and its pos/neg/neu decomposition
pub type CompoundProvider = dyn ScoringProvider<Output = CompoundScores>;

/// Provider of polarity and subjectivity
pub type PolarityProvider = dyn ScoringProvider<Output = PolarityScores>;

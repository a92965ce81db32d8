//! Sentiment domain.
//!
//! - [`scorer::SentimentScorer`] - labels a single statement
//! - [`aggregator::ConversationAggregator`] - conversation totals and trend
//! - [`provider::ScoringProvider`] - pluggable scoring strategy
//! - [`thresholds::SentimentThresholds`] - fixed decision boundaries

pub mod aggregator;
pub mod entities;
pub mod label;
pub mod provider;
pub mod scorer;
pub mod thresholds;

pub use aggregator::{ConversationAggregator, analyze_trend};
pub use entities::{CompoundScores, ConversationSentiment, PolarityScores, StatementSentiment};
pub use label::{SentimentLabel, Trend};
pub use provider::{CompoundProvider, PolarityProvider, ScoringProvider};
pub use scorer::{SentimentScorer, merge};
pub use thresholds::SentimentThresholds;

//! Sentiment result records

use super::label::{SentimentLabel, Trend};
use serde::{Deserialize, Serialize};

/// Three-way weight decomposition plus the normalized compound value
/// produced by a compound-polarity provider.
///
/// `neg + neu + pos` sums to 1 (up to rounding) whenever at least one
/// token was scored; an empty assessment is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompoundScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl CompoundScores {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Output of a bag-of-words polarity/subjectivity provider
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Direction of opinion in [-1, 1]
    pub polarity: f64,
    /// How opinion-laden the text is, in [0, 1]
    pub subjectivity: f64,
}

/// Sentiment of a single statement (Value Object)
///
/// Produced by [`SentimentScorer`](super::scorer::SentimentScorer) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementSentiment {
    text: String,
    label: SentimentLabel,
    score: f64,
    confidence: f64,
    raw_compound_components: CompoundScores,
    secondary_polarity: f64,
    secondary_subjectivity: f64,
}

impl StatementSentiment {
    pub(crate) fn new(
        text: String,
        label: SentimentLabel,
        compound: CompoundScores,
        polarity: PolarityScores,
    ) -> Self {
        Self {
            text,
            label,
            score: compound.compound,
            confidence: compound.compound.abs(),
            raw_compound_components: compound,
            secondary_polarity: polarity.polarity,
            secondary_subjectivity: polarity.subjectivity,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }

    /// Compound polarity in [-1, 1]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// `abs(score)`
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn raw_compound_components(&self) -> &CompoundScores {
        &self.raw_compound_components
    }

    pub fn secondary_polarity(&self) -> f64 {
        self.secondary_polarity
    }

    pub fn secondary_subjectivity(&self) -> f64 {
        self.secondary_subjectivity
    }
}

/// Conversation-level sentiment (Value Object)
///
/// Counts always satisfy
/// `positive_count + negative_count + neutral_count == total_messages`,
/// and `per_message_results` / `label_sequence` hold exactly
/// `total_messages` entries in conversation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSentiment {
    overall_label: SentimentLabel,
    overall_score: f64,
    total_messages: usize,
    positive_count: usize,
    negative_count: usize,
    neutral_count: usize,
    average_confidence: f64,
    trend: Trend,
    per_message_results: Vec<StatementSentiment>,
    label_sequence: Vec<SentimentLabel>,
}

impl ConversationSentiment {
    pub(crate) fn new(
        overall_label: SentimentLabel,
        overall_score: f64,
        average_confidence: f64,
        trend: Trend,
        per_message_results: Vec<StatementSentiment>,
    ) -> Self {
        let label_sequence: Vec<SentimentLabel> =
            per_message_results.iter().map(|r| r.label()).collect();
        let count = |label| label_sequence.iter().filter(|l| **l == label).count();

        Self {
            overall_label,
            overall_score,
            total_messages: per_message_results.len(),
            positive_count: count(SentimentLabel::Positive),
            negative_count: count(SentimentLabel::Negative),
            neutral_count: count(SentimentLabel::Neutral),
            average_confidence,
            trend,
            per_message_results,
            label_sequence,
        }
    }

    pub fn overall_label(&self) -> SentimentLabel {
        self.overall_label
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn total_messages(&self) -> usize {
        self.total_messages
    }

    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    pub fn neutral_count(&self) -> usize {
        self.neutral_count
    }

    pub fn average_confidence(&self) -> f64 {
        self.average_confidence
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn per_message_results(&self) -> &[StatementSentiment] {
        &self.per_message_results
    }

    /// Emotional progression: one label per analyzed message, in order
    pub fn label_sequence(&self) -> &[SentimentLabel] {
        &self.label_sequence
    }
}

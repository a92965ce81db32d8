//! Discrete sentiment labels and conversation trends

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete sentiment classification of a statement or a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Short reading of the label when used for a whole conversation
    pub fn interpretation(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "overall positivity",
            SentimentLabel::Negative => "general dissatisfaction",
            SentimentLabel::Neutral => "balanced or mixed sentiment",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of sentiment between the first and second half of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    /// Fewer than two analyzed messages
    Insufficient,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving",
            Trend::Declining => "Declining",
            Trend::Stable => "Stable",
            Trend::Insufficient => "Insufficient",
        }
    }

    /// Human readable description used by the console output
    pub fn description(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving - Sentiment became more positive",
            Trend::Declining => "Declining - Sentiment became more negative",
            Trend::Stable => "Stable - Sentiment remained consistent",
            Trend::Insufficient => "Insufficient data for trend analysis",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

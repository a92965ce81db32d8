//! Domain layer for sentibot
//!
//! This crate contains the sentiment engine, session entities and reply
//! selection. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Statement sentiment
//!
//! A [`SentimentScorer`] merges two pluggable [`ScoringProvider`]s into a
//! [`StatementSentiment`]: a compound polarity (which decides the label) and a
//! secondary polarity/subjectivity pair.
//!
//! ## Conversation sentiment
//!
//! A [`ConversationAggregator`] scores every human turn and derives totals,
//! an overall label (same thresholds as statements) and a [`Trend`] from the
//! first and second half of the conversation.

pub mod config;
pub mod core;
pub mod response;
pub mod sentiment;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use response::{FirstChoice, ResponseCategory, ResponseChooser, ResponseSelector};
pub use sentiment::{
    CompoundProvider, CompoundScores, ConversationAggregator, ConversationSentiment,
    PolarityProvider, PolarityScores, ScoringProvider, SentimentLabel, SentimentScorer,
    SentimentThresholds, StatementSentiment, Trend,
};
pub use session::{
    entities::{Author, Conversation, ConversationSummary, Turn},
    repository::TurnLog,
};

//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_sentiment;
pub mod export_analysis;
pub mod run_chat_turn;

#[cfg(test)]
pub(crate) mod testing {
    //! Keyword-driven providers so use case tests do not depend on a lexicon.

    use sentibot_domain::{
        CompoundScores, ConversationAggregator, PolarityScores, ScoringProvider, SentimentScorer,
    };
    use std::sync::Arc;

    /// "good" scores 0.5, "bad" scores -0.5; the compound is the mean of hits
    pub struct KeywordCompound;

    impl ScoringProvider for KeywordCompound {
        type Output = CompoundScores;

        fn name(&self) -> &'static str {
            "keyword-compound"
        }

        fn score(&self, text: &str) -> CompoundScores {
            let hits: Vec<f64> = text
                .split(|c: char| !c.is_alphanumeric())
                .filter_map(|w| match w.to_lowercase().as_str() {
                    "good" => Some(0.5),
                    "bad" => Some(-0.5),
                    _ => None,
                })
                .collect();
            let compound = if hits.is_empty() {
                0.0
            } else {
                hits.iter().sum::<f64>() / hits.len() as f64
            };
            CompoundScores {
                compound,
                neu: 1.0,
                ..CompoundScores::default()
            }
        }
    }

    pub struct NoPolarity;

    impl ScoringProvider for NoPolarity {
        type Output = PolarityScores;

        fn name(&self) -> &'static str {
            "no-polarity"
        }

        fn score(&self, _text: &str) -> PolarityScores {
            PolarityScores::default()
        }
    }

    pub fn aggregator() -> ConversationAggregator {
        ConversationAggregator::new(SentimentScorer::new(
            Arc::new(KeywordCompound),
            Arc::new(NoPolarity),
        ))
    }
}

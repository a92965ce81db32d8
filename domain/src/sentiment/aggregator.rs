//! Conversation-level sentiment aggregation

use super::entities::{ConversationSentiment, StatementSentiment};
use super::label::Trend;
use super::scorer::SentimentScorer;
use super::thresholds::SentimentThresholds;
use crate::core::error::DomainError;
use crate::session::entities::Turn;
use tracing::info;

/// Combines per-statement sentiment of the human turns into a
/// [`ConversationSentiment`].
#[derive(Clone)]
pub struct ConversationAggregator {
    scorer: SentimentScorer,
}

impl ConversationAggregator {
    /// Statement and conversation labels share the scorer's thresholds.
    pub fn new(scorer: SentimentScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    /// Analyze an ordered sequence of turns.
    ///
    /// Only human turns with non-blank text are scored (trimmed), in order.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] when `turns` is empty
    /// - [`DomainError::NoAnalyzableContent`] when no human turn has text
    pub fn aggregate(&self, turns: &[Turn]) -> Result<ConversationSentiment, DomainError> {
        if turns.is_empty() {
            return Err(DomainError::InvalidInput(
                "conversation has no turns".to_string(),
            ));
        }

        let results = turns
            .iter()
            .filter(|turn| turn.is_human())
            .map(|turn| turn.text.trim())
            .filter(|text| !text.is_empty())
            .map(|text| self.scorer.score(text))
            .collect::<Result<Vec<_>, _>>()?;

        if results.is_empty() {
            return Err(DomainError::NoAnalyzableContent);
        }

        let thresholds = self.scorer.thresholds();
        let overall_score = mean(results.iter().map(StatementSentiment::score));
        let average_confidence = mean(results.iter().map(StatementSentiment::confidence));
        let overall_label = thresholds.classify(overall_score);
        let trend = analyze_trend(&results, thresholds);

        info!(
            messages = results.len(),
            overall_score,
            label = %overall_label,
            trend = %trend,
            "Aggregated conversation sentiment"
        );

        Ok(ConversationSentiment::new(
            overall_label,
            overall_score,
            average_confidence,
            trend,
            results,
        ))
    }
}

/// Compare mean scores of the first and second half of `results`.
///
/// The split point is `len / 2`, so for an odd length the middle element
/// belongs to the second half only.
pub fn analyze_trend(results: &[StatementSentiment], thresholds: &SentimentThresholds) -> Trend {
    if results.len() < 2 {
        return Trend::Insufficient;
    }

    let (first, second) = results.split_at(results.len() / 2);
    let first_mean = mean(first.iter().map(StatementSentiment::score));
    let second_mean = mean(second.iter().map(StatementSentiment::score));

    thresholds.classify_delta(second_mean - first_mean)
}

/// Arithmetic mean; callers guarantee a non-empty iterator
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::entities::PolarityScores;
    use crate::sentiment::label::SentimentLabel;
    use crate::sentiment::provider::testing::{ConstantPolarity, FixedCompound};
    use crate::session::entities::Author;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn aggregator(compound: FixedCompound) -> ConversationAggregator {
        ConversationAggregator::new(SentimentScorer::new(
            Arc::new(compound),
            Arc::new(ConstantPolarity(PolarityScores::default())),
        ))
    }

    fn turn(author: Author, text: &str) -> Turn {
        Turn::new(author, text, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }

    fn human(text: &str) -> Turn {
        turn(Author::Human, text)
    }

    fn assistant(text: &str) -> Turn {
        turn(Author::Assistant, text)
    }

    fn scores() -> FixedCompound {
        FixedCompound::default()
            .with("bad", -0.6)
            .with("okay", 0.0)
            .with("good", 0.4)
            .with("great", 0.8)
    }

    #[test]
    fn test_empty_turns_is_invalid_input() {
        let err = aggregator(scores()).aggregate(&[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_assistant_only_has_no_content() {
        let err = aggregator(scores())
            .aggregate(&[assistant("x")])
            .unwrap_err();
        assert_eq!(err, DomainError::NoAnalyzableContent);
    }

    #[test]
    fn test_blank_human_turns_have_no_content() {
        let err = aggregator(scores())
            .aggregate(&[human("   "), assistant("hello"), human("")])
            .unwrap_err();
        assert_eq!(err, DomainError::NoAnalyzableContent);
    }

    #[test]
    fn test_only_human_turns_are_scored_in_order() {
        let result = aggregator(scores())
            .aggregate(&[
                human("good"),
                assistant("great"),
                human("  bad  "),
                human(" "),
                human("okay"),
            ])
            .unwrap();

        assert_eq!(result.total_messages(), 3);
        assert_eq!(
            result.label_sequence(),
            &[
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
        assert_eq!(result.per_message_results()[1].text(), "bad");
        assert_eq!(
            result.positive_count() + result.negative_count() + result.neutral_count(),
            result.total_messages()
        );
    }

    #[test]
    fn test_overall_score_and_confidence_are_means() {
        let result = aggregator(scores())
            .aggregate(&[human("good"), human("bad"), human("great")])
            .unwrap();
        assert!((result.overall_score() - 0.2).abs() < 1e-9);
        assert!((result.average_confidence() - 0.6).abs() < 1e-9);
        assert_eq!(result.overall_label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_overall_label_uses_statement_thresholds() {
        // mean = (0.4 - 0.6 + 0.0) / 3 = -0.0667
        let result = aggregator(scores())
            .aggregate(&[human("good"), human("bad"), human("okay")])
            .unwrap();
        assert_eq!(result.overall_label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_single_message_trend_is_insufficient() {
        let result = aggregator(scores()).aggregate(&[human("good")]).unwrap();
        assert_eq!(result.trend(), Trend::Insufficient);
    }

    #[test]
    fn test_trend_improving_and_declining() {
        let agg = aggregator(scores());
        let up = agg
            .aggregate(&[human("bad"), assistant("..."), human("good"), human("great")])
            .unwrap();
        assert_eq!(up.trend(), Trend::Improving);

        let down = agg
            .aggregate(&[human("great"), assistant("..."), human("bad"), human("bad")])
            .unwrap();
        assert_eq!(down.trend(), Trend::Declining);
    }

    #[test]
    fn test_odd_length_middle_element_joins_second_half() {
        // first = [okay] (0.0), second = [great, okay] (0.4).
        // Splitting at ceil(n/2) would report Declining here.
        let result = aggregator(scores())
            .aggregate(&[human("okay"), human("great"), human("okay")])
            .unwrap();
        assert_eq!(result.trend(), Trend::Improving);

        // first = [bad] (-0.6), second = [great, okay] (0.4)
        let result = aggregator(scores())
            .aggregate(&[human("bad"), human("great"), human("okay")])
            .unwrap();
        assert_eq!(result.trend(), Trend::Improving);
    }

    #[test]
    fn test_small_change_is_stable() {
        let result = aggregator(scores())
            .aggregate(&[human("okay"), human("okay")])
            .unwrap();
        assert_eq!(result.trend(), Trend::Stable);
    }

    #[test]
    fn test_custom_trend_delta() {
        let scorer = SentimentScorer::new(
            Arc::new(scores()),
            Arc::new(ConstantPolarity(PolarityScores::default())),
        )
        .with_thresholds(SentimentThresholds::new(0.05, -0.05, 2.0).unwrap());
        let result = ConversationAggregator::new(scorer)
            .aggregate(&[human("bad"), human("great")])
            .unwrap();
        assert_eq!(result.trend(), Trend::Stable);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let agg = aggregator(scores());
        let turns = [human("good"), assistant("x"), human("bad"), human("great")];
        assert_eq!(agg.aggregate(&turns).unwrap(), agg.aggregate(&turns).unwrap());
    }
}

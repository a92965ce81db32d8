//! Canned response selection keyed by sentiment label and keywords

use super::category::ResponseCategory;
use crate::sentiment::label::SentimentLabel;
use std::sync::Arc;

const SUPPORT_WORDS: &[&str] = &["help", "can", "support", "fix", "solve"];
const CELEBRATION_WORDS: &[&str] = &[
    "excited",
    "happy",
    "love",
    "amazing",
    "fantastic",
    "wonderful",
];
const QUESTION_WORDS: &[&str] = &["what", "how", "why", "when", "where"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "disappointing",
    "frustrated",
];
const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "love",
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
];

/// Source of the choice among a bucket's templates.
///
/// Injected so that tests can pin the pick while production uses an RNG.
pub trait ResponseChooser: Send + Sync {
    /// Return an index in `0..len`; `len` is never zero
    fn choose(&self, len: usize) -> usize;
}

/// Always picks the first candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl ResponseChooser for FirstChoice {
    fn choose(&self, _len: usize) -> usize {
        0
    }
}

/// Picks a reply for a user message
#[derive(Clone)]
pub struct ResponseSelector {
    chooser: Arc<dyn ResponseChooser>,
}

impl ResponseSelector {
    pub fn new(chooser: Arc<dyn ResponseChooser>) -> Self {
        Self { chooser }
    }

    /// Decide the bucket for `text`.
    ///
    /// With a label, keywords refine the label's two buckets. Without one,
    /// keywords alone pick the bucket.
    pub fn categorize(text: &str, label: Option<SentimentLabel>) -> ResponseCategory {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .collect();
        let has_any = |list: &[&str]| words.iter().any(|w| list.contains(w));

        match label {
            Some(SentimentLabel::Negative) if has_any(SUPPORT_WORDS) => {
                ResponseCategory::NegativeSupport
            }
            Some(SentimentLabel::Negative) => ResponseCategory::NegativeEmpathy,
            Some(SentimentLabel::Positive) if has_any(CELEBRATION_WORDS) => {
                ResponseCategory::PositiveCelebration
            }
            Some(SentimentLabel::Positive) => ResponseCategory::PositiveEncouragement,
            Some(SentimentLabel::Neutral) if lower.contains('?') || has_any(QUESTION_WORDS) => {
                ResponseCategory::NeutralInquiry
            }
            Some(SentimentLabel::Neutral) => ResponseCategory::NeutralAcknowledge,
            None if has_any(GREETING_WORDS) => ResponseCategory::NeutralInquiry,
            None if has_any(NEGATIVE_WORDS) => ResponseCategory::NegativeEmpathy,
            None if has_any(POSITIVE_WORDS) => ResponseCategory::PositiveCelebration,
            None => ResponseCategory::Default,
        }
    }

    /// All replies `select` may return for this input
    pub fn candidates(text: &str, label: Option<SentimentLabel>) -> &'static [&'static str] {
        Self::categorize(text, label).templates()
    }

    pub fn select(&self, text: &str, label: Option<SentimentLabel>) -> &'static str {
        let candidates = Self::candidates(text, label);
        candidates[self.chooser.choose(candidates.len()) % candidates.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastChoice;

    impl ResponseChooser for LastChoice {
        fn choose(&self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn test_negative_buckets() {
        assert_eq!(
            ResponseSelector::categorize("Can you fix this mess?", Some(SentimentLabel::Negative)),
            ResponseCategory::NegativeSupport
        );
        assert_eq!(
            ResponseSelector::categorize("This is awful", Some(SentimentLabel::Negative)),
            ResponseCategory::NegativeEmpathy
        );
    }

    #[test]
    fn test_positive_buckets() {
        assert_eq!(
            ResponseSelector::categorize("I love it", Some(SentimentLabel::Positive)),
            ResponseCategory::PositiveCelebration
        );
        assert_eq!(
            ResponseSelector::categorize("Pretty nice", Some(SentimentLabel::Positive)),
            ResponseCategory::PositiveEncouragement
        );
    }

    #[test]
    fn test_neutral_buckets() {
        assert_eq!(
            ResponseSelector::categorize("Opening hours?", Some(SentimentLabel::Neutral)),
            ResponseCategory::NeutralInquiry
        );
        assert_eq!(
            ResponseSelector::categorize("Where is my order", Some(SentimentLabel::Neutral)),
            ResponseCategory::NeutralInquiry
        );
        assert_eq!(
            ResponseSelector::categorize("My order number is 42", Some(SentimentLabel::Neutral)),
            ResponseCategory::NeutralAcknowledge
        );
    }

    #[test]
    fn test_keyword_fallback_without_label() {
        assert_eq!(
            ResponseSelector::categorize("Hey there", None),
            ResponseCategory::NeutralInquiry
        );
        assert_eq!(
            ResponseSelector::categorize("that was terrible", None),
            ResponseCategory::NegativeEmpathy
        );
        assert_eq!(
            ResponseSelector::categorize("excellent work", None),
            ResponseCategory::PositiveCelebration
        );
        assert_eq!(
            ResponseSelector::categorize("the sky", None),
            ResponseCategory::Default
        );
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        // "this" must not count as the greeting "hi"
        assert_eq!(
            ResponseSelector::categorize("this thing", None),
            ResponseCategory::Default
        );
    }

    #[test]
    fn test_select_returns_a_candidate() {
        let selector = ResponseSelector::new(Arc::new(LastChoice));
        let text = "I am so happy";
        let reply = selector.select(text, Some(SentimentLabel::Positive));
        let candidates = ResponseSelector::candidates(text, Some(SentimentLabel::Positive));
        assert!(candidates.contains(&reply));
        assert_eq!(reply, candidates[candidates.len() - 1]);
    }

    #[test]
    fn test_first_choice_is_deterministic() {
        let selector = ResponseSelector::new(Arc::new(FirstChoice));
        assert_eq!(
            selector.select("ok", Some(SentimentLabel::Neutral)),
            ResponseCategory::NeutralAcknowledge.templates()[0]
        );
    }
}

//! Pattern-based polarity and subjectivity scorer.
//!
//! Averages the assessments of known adjectives. A directly preceding
//! intensifier scales an assessment; a negation one or two words earlier
//! reverses it at half strength.

use super::polarity_lexicon::{ADJECTIVES, INTENSIFIERS, NEGATIONS};
use sentibot_domain::{PolarityScores, ScoringProvider};
use std::collections::{HashMap, HashSet};

const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
}

/// Polarity scorer backed by an adjective lexicon.
pub struct PatternPolarityScorer {
    adjectives: HashMap<String, Assessment>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for PatternPolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternPolarityScorer {
    pub fn new() -> Self {
        Self {
            adjectives: ADJECTIVES
                .iter()
                .map(|(w, polarity, subjectivity)| {
                    (
                        w.to_string(),
                        Assessment {
                            polarity: *polarity,
                            subjectivity: *subjectivity,
                        },
                    )
                })
                .collect(),
            intensifiers: INTENSIFIERS.iter().map(|(w, m)| (w.to_string(), *m)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn assess(&self, text: &str) -> PolarityScores {
        let words: Vec<String> = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        let assessments: Vec<Assessment> = (0..words.len())
            .filter_map(|i| self.assess_word(&words, i))
            .collect();

        if assessments.is_empty() {
            return PolarityScores::default();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        PolarityScores {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    fn assess_word(&self, words: &[String], i: usize) -> Option<Assessment> {
        let mut assessment = *self.adjectives.get(&words[i])?;

        if let Some(multiplier) = i
            .checked_sub(1)
            .and_then(|j| self.intensifiers.get(&words[j]))
        {
            assessment.polarity = (assessment.polarity * multiplier).clamp(-1.0, 1.0);
            assessment.subjectivity = (assessment.subjectivity * multiplier).min(1.0);
        }

        let negated = (1..=2)
            .filter_map(|d| i.checked_sub(d))
            .any(|j| self.is_negation(&words[j]));
        if negated {
            assessment.polarity *= NEGATION_FACTOR;
        }

        Some(assessment)
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }
}

impl ScoringProvider for PatternPolarityScorer {
    type Output = PolarityScores;

    fn name(&self) -> &'static str {
        "pattern-polarity"
    }

    fn score(&self, text: &str) -> PolarityScores {
        self.assess(text)
    }
}

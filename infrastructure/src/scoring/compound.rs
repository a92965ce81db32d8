//! Rule-based compound polarity scorer.
//!
//! Valence-aware lexicon scoring at sentence level: word valences are
//! adjusted for boosters, negation, capitalization and contrast ("but"),
//! summed with punctuation emphasis and normalized into [-1, 1].

use super::compound_lexicon::{BOOSTERS, NEGATORS, VALENCES};
use sentibot_domain::{CompoundScores, ScoringProvider};
use std::collections::{HashMap, HashSet};

const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NEVER_SO_SCALAR: f64 = 1.25;
const CONTRAST_BEFORE: f64 = 0.5;
const CONTRAST_AFTER: f64 = 1.5;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Compound polarity scorer backed by a valence lexicon.
pub struct LexiconCompoundScorer {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negators: HashSet<String>,
}

impl Default for LexiconCompoundScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconCompoundScorer {
    /// Create a scorer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            boosters: BOOSTERS.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            negators: NEGATORS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Lexicon valence of a word
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    /// Score `text` into compound polarity plus pos/neg/neu proportions
    pub fn polarity_scores(&self, text: &str) -> CompoundScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return CompoundScores::neutral();
        }

        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_differ = caps_differ(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let kind_of = lower[i] == "kind" && lower.get(i + 1).is_some_and(|w| w == "of");
            if self.boosters.contains_key(&lower[i]) || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&tokens, &lower, i, caps_differ));
        }

        apply_contrast(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn valence_at(&self, tokens: &[&str], lower: &[String], i: usize, caps_differ: bool) -> f64 {
        let Some(&base) = self.valences.get(&lower[i]) else {
            return 0.0;
        };

        let mut valence = base;
        if caps_differ && is_all_caps(tokens[i]) {
            if valence > 0.0 {
                valence += CAPS_INCREMENT;
            } else {
                valence -= CAPS_INCREMENT;
            }
        }

        // Up to three preceding words that are not sentiment words themselves
        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let j = i - distance;
            if self.valences.contains_key(&lower[j]) {
                continue;
            }

            let mut scalar = self.booster_scalar(tokens[j], &lower[j], valence, caps_differ);
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = self.apply_negation(lower, i, j, valence);
        }

        apply_least(lower, i, valence)
    }

    fn booster_scalar(&self, token: &str, lower: &str, valence: f64, caps_differ: bool) -> f64 {
        let Some(&boost) = self.boosters.get(lower) else {
            return 0.0;
        };

        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if caps_differ && is_all_caps(token) {
            if valence > 0.0 {
                scalar += CAPS_INCREMENT;
            } else {
                scalar -= CAPS_INCREMENT;
            }
        }
        scalar
    }

    /// Negation by the word at `j` on the sentiment word at `i`
    fn apply_negation(&self, lower: &[String], i: usize, j: usize, valence: f64) -> f64 {
        let between = &lower[j + 1..i];
        match lower[j].as_str() {
            "never" if between.iter().any(|w| w == "so" || w == "this") => {
                valence * NEVER_SO_SCALAR
            }
            "without" if between.first().is_some_and(|w| w == "doubt") => valence,
            word if self.is_negator(word) => valence * NEGATION_SCALAR,
            _ => valence,
        }
    }

    fn is_negator(&self, lower: &str) -> bool {
        self.negators.contains(lower) || lower.contains("n't")
    }
}

impl ScoringProvider for LexiconCompoundScorer {
    type Output = CompoundScores;

    fn name(&self) -> &'static str {
        "lexicon-compound"
    }

    fn score(&self, text: &str) -> CompoundScores {
        self.polarity_scores(text)
    }
}

/// Split on whitespace and strip surrounding punctuation. Tokens made only of
/// punctuation (emoticons) are kept as they are.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.is_empty() { token } else { stripped }
        })
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in capitals
fn caps_differ(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

/// "least X" flips X unless it reads "at least" or "very least"
fn apply_least(lower: &[String], i: usize, valence: f64) -> f64 {
    if i >= 1 && lower[i - 1] == "least" {
        let qualified = i >= 2 && (lower[i - 2] == "at" || lower[i - 2] == "very");
        if !qualified {
            return valence * NEGATION_SCALAR;
        }
    }
    valence
}

/// Dampen sentiment before the first "but" and amplify it after
fn apply_contrast(lower: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        if idx < pivot {
            *s *= CONTRAST_BEFORE;
        } else if idx > pivot {
            *s *= CONTRAST_AFTER;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations as f64 * EXCLAMATION_WEIGHT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valence(sentiments: &[f64], text: &str) -> CompoundScores {
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return CompoundScores::neutral();
    }

    CompoundScores {
        neg: round_to(neg_sum.abs() / total, 3),
        neu: round_to(neu_count / total, 3),
        pos: round_to(pos_sum / total, 3),
        compound: round_to(compound, 4),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

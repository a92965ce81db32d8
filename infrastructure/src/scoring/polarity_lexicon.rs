//! Built-in adjective lexicon for the polarity scorer.
//!
//! Each entry is `(word, polarity, subjectivity)` with polarity in [-1, 1]
//! and subjectivity in [0, 1].

pub(super) const ADJECTIVES: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.667),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("broken", -0.4, 0.4),
    ("cheap", 0.4, 0.7),
    ("clean", 0.367, 0.683),
    ("confusing", -0.3, 0.3),
    ("cool", 0.35, 0.65),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("easy", 0.433, 0.833),
    ("excellent", 1.0, 1.0),
    ("expensive", -0.5, 0.7),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("fine", 0.417, 0.5),
    ("friendly", 0.375, 0.5),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hard", -0.292, 0.542),
    ("helpful", 0.5, 0.5),
    ("horrible", -1.0, 1.0),
    ("important", 0.4, 1.0),
    ("interesting", 0.5, 0.5),
    ("lovely", 0.5, 0.75),
    ("mediocre", -0.4, 0.6),
    ("new", 0.136, 0.455),
    ("nice", 0.6, 1.0),
    ("okay", 0.5, 0.5),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.733, 0.967),
    ("poor", -0.4, 0.6),
    ("quick", 0.333, 0.5),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("simple", 0.0, 0.357),
    ("slow", -0.3, 0.4),
    ("sorry", -0.5, 1.0),
    ("strange", -0.05, 0.15),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("useful", 0.3, 0.0),
    ("useless", -0.5, 0.2),
    ("weird", -0.5, 1.0),
    ("wonderful", 1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that multiply the polarity and subjectivity of the next adjective
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
    ("barely", 0.5),
    ("fairly", 0.8),
    ("pretty", 0.9),
    ("rather", 0.9),
    ("slightly", 0.6),
    ("somewhat", 0.6),
];

/// Words that reverse (and dampen) a nearby adjective
pub(super) const NEGATIONS: &[&str] = &["not", "never", "no", "hardly", "without"];

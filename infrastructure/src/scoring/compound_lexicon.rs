//! Built-in valence lexicon for the compound scorer.
//!
//! Valences use a [-4, 4] scale: 0 is neutral, ±4 is the most extreme.

/// Word valences
pub(super) const VALENCES: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("amazed", 2.2),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("comfortable", 2.3),
    ("cool", 1.3),
    ("delight", 2.9),
    ("delighted", 3.1),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceed", 1.3),
    ("exceeded", 1.3),
    ("exceeds", 1.3),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.9),
    ("hope", 1.9),
    ("hopeful", 1.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("improving", 1.8),
    ("joy", 2.8),
    ("kind", 2.4),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("quick", 1.0),
    ("recommend", 1.5),
    ("relief", 2.1),
    ("relieved", 1.6),
    ("reliable", 1.6),
    ("resolved", 0.7),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smile", 1.5),
    ("solved", 1.1),
    ("success", 2.7),
    ("successful", 2.8),
    ("superb", 3.1),
    ("support", 1.7),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 2.7),
    ("top", 0.8),
    ("trust", 2.3),
    ("useful", 1.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("won", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("cancel", -1.0),
    ("cancelled", -1.0),
    ("complain", -1.4),
    ("complaint", -1.2),
    ("confused", -1.3),
    ("confusing", -1.4),
    ("crap", -1.6),
    ("cry", -2.1),
    ("crying", -2.1),
    ("damn", -1.7),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("depressed", -2.3),
    ("difficult", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("doubt", -1.5),
    ("dumb", -2.3),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("furious", -2.7),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("incompetent", -2.1),
    ("lonely", -2.0),
    ("lost", -1.3),
    ("mad", -2.2),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("nightmare", -2.7),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("ridiculous", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scared", -1.9),
    ("slow", -1.0),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("tired", -1.9),
    ("ugly", -2.3),
    ("unacceptable", -2.0),
    ("unfortunately", -1.4),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    // emoticons
    (":)", 2.0),
    (":-)", 2.0),
    (":(", -1.9),
    (":-(", -1.9),
];

/// Words that scale the next sentiment word up (positive) or down (negative)
pub(super) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("awfully", 0.293),
    ("completely", 0.293),
    ("considerably", 0.293),
    ("deeply", 0.293),
    ("enormously", 0.293),
    ("entirely", 0.293),
    ("especially", 0.293),
    ("exceptionally", 0.293),
    ("extremely", 0.293),
    ("fully", 0.293),
    ("greatly", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("intensely", 0.293),
    ("more", 0.293),
    ("most", 0.293),
    ("particularly", 0.293),
    ("purely", 0.293),
    ("quite", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("substantially", 0.293),
    ("super", 0.293),
    ("thoroughly", 0.293),
    ("totally", 0.293),
    ("tremendously", 0.293),
    ("unbelievably", 0.293),
    ("unusually", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("little", -0.293),
    ("marginally", -0.293),
    ("occasionally", -0.293),
    ("partly", -0.293),
    ("scarcely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

/// Words that flip the polarity of a following sentiment word.
/// Any token containing "n't" is treated as a negator as well.
pub(super) const NEGATORS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "no", "none",
    "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

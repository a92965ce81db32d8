//! Response buckets and their canned templates

use serde::{Deserialize, Serialize};

/// A bucket of canned replies chosen from the statement label and keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    NegativeEmpathy,
    NegativeSupport,
    PositiveCelebration,
    PositiveEncouragement,
    NeutralInquiry,
    NeutralAcknowledge,
    Default,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 7] = [
        ResponseCategory::NegativeEmpathy,
        ResponseCategory::NegativeSupport,
        ResponseCategory::PositiveCelebration,
        ResponseCategory::PositiveEncouragement,
        ResponseCategory::NeutralInquiry,
        ResponseCategory::NeutralAcknowledge,
        ResponseCategory::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::NegativeEmpathy => "negative_empathy",
            ResponseCategory::NegativeSupport => "negative_support",
            ResponseCategory::PositiveCelebration => "positive_celebration",
            ResponseCategory::PositiveEncouragement => "positive_encouragement",
            ResponseCategory::NeutralInquiry => "neutral_inquiry",
            ResponseCategory::NeutralAcknowledge => "neutral_acknowledge",
            ResponseCategory::Default => "default",
        }
    }

    /// Candidate replies for this bucket (never empty)
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            ResponseCategory::NegativeEmpathy => &[
                "I'm sorry to hear that. I'll make sure your concern is addressed.",
                "I understand this didn't meet your expectations. I'm here to help fix it.",
                "I'm sorry you feel this way. Let me try to make things better.",
            ],
            ResponseCategory::NegativeSupport => &[
                "I hear your disappointment. Let me help you find a solution.",
                "I'm sorry things didn't go well. What can we improve?",
                "Your concern is valid. Tell me how I can support you.",
            ],
            ResponseCategory::PositiveCelebration => &[
                "I'm glad to hear that! I'll keep up that standard.",
                "That's wonderful! I'm happy your experience was better.",
                "Great! I'm happy things are improving for you.",
            ],
            ResponseCategory::PositiveEncouragement => &[
                "That's great! I appreciate the positive feedback.",
                "Awesome! I'm glad things are moving in the right direction.",
                "Good to hear! Let me know how else I can help.",
            ],
            ResponseCategory::NeutralInquiry => &[
                "I see. Could you tell me more?",
                "Alright. What would you like to discuss further?",
                "Okay. How can I assist you next?",
            ],
            ResponseCategory::NeutralAcknowledge => &[
                "Thank you for sharing that.",
                "Got it. Let me know what you'd like to do next.",
                "Okay, I understand.",
            ],
            ResponseCategory::Default => &[
                "I'm here to help. Tell me more.",
                "Alright. How would you like to continue?",
                "I'm listening. Go ahead.",
            ],
        }
    }
}

//! Session domain entities

use super::repository::TurnLog;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Author of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    #[serde(alias = "user")]
    Human,
    Assistant,
}

/// A single turn in a conversation (Entity)
///
/// Transcripts may also use `role`/`content` keys and `user` for the human
/// author; a missing `created_at` is filled with the load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(alias = "role")]
    pub author: Author,
    #[serde(alias = "content")]
    pub text: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(author: Author, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            author,
            text: text.into(),
            created_at,
        }
    }

    pub fn human(text: impl Into<String>) -> Self {
        Self::new(Author::Human, text, Utc::now())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Author::Assistant, text, Utc::now())
    }

    pub fn is_human(&self) -> bool {
        self.author == Author::Human
    }
}

/// Statistics about a conversation at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    #[serde(skip)]
    pub duration: TimeDelta,
}

/// An in-memory chat session (Entity)
///
/// Keeps turns in the order they were recorded.
#[derive(Debug, Clone)]
pub struct Conversation {
    bot_name: String,
    turns: Vec<Turn>,
    started_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            turns: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append a turn stamped with the current time and return it
    pub fn record(&mut self, author: Author, text: impl Into<String>) -> &Turn {
        self.push(Turn::new(author, text, Utc::now()))
    }

    pub fn record_human(&mut self, text: impl Into<String>) -> &Turn {
        self.record(Author::Human, text)
    }

    pub fn record_assistant(&mut self, text: impl Into<String>) -> &Turn {
        self.record(Author::Assistant, text)
    }

    /// Append an already built turn (e.g. replayed from a transcript)
    pub fn push(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// Text of the most recent human turn, if any
    pub fn latest_human_text(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.is_human())
            .map(|t| t.text.as_str())
    }

    /// Drop all turns and restart the session clock
    pub fn clear(&mut self) {
        self.turns.clear();
        self.started_at = Utc::now();
    }

    pub fn summary(&self, now: DateTime<Utc>) -> ConversationSummary {
        let user_messages = self.turns.iter().filter(|t| t.is_human()).count();
        ConversationSummary {
            total_messages: self.turns.len(),
            user_messages,
            assistant_messages: self.turns.len() - user_messages,
            duration: now - self.started_at,
        }
    }
}

impl TurnLog for Conversation {
    fn all_turns(&self) -> &[Turn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_keep_recording_order() {
        let mut conv = Conversation::new("SentimentBot");
        conv.record_human("hello");
        conv.record_assistant("hi there");
        conv.record_human("bye");

        let texts: Vec<&str> = conv.all_turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "hi there", "bye"]);
        assert_eq!(conv.human_turns().count(), 2);
    }

    #[test]
    fn test_latest_human_text() {
        let mut conv = Conversation::new("bot");
        assert_eq!(conv.latest_human_text(), None);
        conv.record_human("first");
        conv.record_assistant("reply");
        assert_eq!(conv.latest_human_text(), Some("first"));
    }

    #[test]
    fn test_summary_counts_authors() {
        let mut conv = Conversation::new("bot");
        conv.record_human("a");
        conv.record_assistant("b");
        conv.record_human("c");

        let summary = conv.summary(conv.started_at() + TimeDelta::seconds(90));
        assert_eq!(summary.total_messages, 3);
        assert_eq!(summary.user_messages, 2);
        assert_eq!(summary.assistant_messages, 1);
        assert_eq!(summary.duration, TimeDelta::seconds(90));
    }

    #[test]
    fn test_clear_empties_history() {
        let mut conv = Conversation::new("bot");
        conv.record_human("a");
        conv.clear();
        assert!(conv.is_empty());
        assert_eq!(conv.summary(Utc::now()).total_messages, 0);
    }

    #[test]
    fn test_author_serializes_lowercase() {
        let turn = Turn::new(Author::Human, "hey", Utc::now());
        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["author"], "human");
    }
}

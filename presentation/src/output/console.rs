//! Console output formatter for sentiment results

use crate::output::formatter::OutputFormatter;
use chrono::TimeDelta;
use colored::{ColoredString, Colorize};
use sentibot_domain::{
    Author, ConversationSentiment, ConversationSummary, SentimentLabel, StatementSentiment, Turn,
};
use serde::Serialize;

/// Formats sentiment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Statement-level block shown after each user message
    pub fn format_statement(result: &StatementSentiment) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "[Statement Sentiment]".cyan().bold()));
        output.push_str(&format!(
            "  Sentiment:     {}\n",
            Self::label(result.label())
        ));
        output.push_str(&format!("  Score:         {:+.3}\n", result.score()));
        output.push_str(&format!(
            "  Confidence:    {}\n",
            Self::percent(result.confidence())
        ));
        output.push_str(&format!(
            "  Subjectivity:  {}\n",
            Self::percent(result.secondary_subjectivity())
        ));

        output
    }

    /// Conversation-level report
    pub fn format_conversation(analysis: &ConversationSentiment) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Conversation Sentiment"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Overall Sentiment:".cyan().bold(),
            Self::label(analysis.overall_label())
        ));
        output.push_str(&format!("Overall Score:     {:.3}\n", analysis.overall_score()));
        output.push_str(&format!(
            "Avg Confidence:    {}\n",
            Self::percent(analysis.average_confidence())
        ));

        output.push_str(&Self::section_header("Message Breakdown"));
        output.push_str(&format!("  Total:    {}\n", analysis.total_messages()));
        output.push_str(&format!("  Positive: {}\n", analysis.positive_count()));
        output.push_str(&format!("  Negative: {}\n", analysis.negative_count()));
        output.push_str(&format!("  Neutral:  {}\n", analysis.neutral_count()));

        output.push_str(&format!(
            "\nOverall conversation sentiment: {} - {}\n",
            Self::label(analysis.overall_label()),
            analysis.overall_label().interpretation()
        ));

        output.push_str(&Self::section_header("Sentiment Trend"));
        output.push_str(&format!("  {}\n", analysis.trend().description()));

        output.push_str(&Self::section_header("Emotional Progression"));
        let progression: Vec<String> = analysis
            .label_sequence()
            .iter()
            .map(|label| Self::label(*label).to_string())
            .collect();
        output.push_str(&format!("  {}\n", progression.join(" → ")));

        output.push_str(&Self::footer());
        output
    }

    /// End-of-session statistics
    pub fn format_summary(summary: &ConversationSummary) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Session Summary"));
        output.push('\n');
        output.push_str(&format!(
            "Duration:        {}\n",
            Self::format_duration(summary.duration)
        ));
        output.push_str(&format!("User Messages:   {}\n", summary.user_messages));
        output.push_str(&format!("Bot Messages:    {}\n", summary.assistant_messages));
        output
    }

    /// Transcript of the conversation so far
    pub fn format_history(turns: &[Turn], bot_name: &str) -> String {
        if turns.is_empty() {
            return format!("{}\n", "(no messages yet)".dimmed());
        }

        turns
            .iter()
            .map(|turn| {
                let speaker = match turn.author {
                    Author::Human => "You".bold(),
                    Author::Assistant => bot_name.yellow().bold(),
                };
                format!(
                    "{} {}: {}\n",
                    turn.created_at.format("%H:%M:%S").to_string().dimmed(),
                    speaker,
                    turn.text
                )
            })
            .collect()
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// `H:MM:SS`, negative durations shown as zero
    pub fn format_duration(duration: TimeDelta) -> String {
        let secs = duration.num_seconds().max(0);
        format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    fn label(label: SentimentLabel) -> ColoredString {
        match label {
            SentimentLabel::Positive => label.as_str().green().bold(),
            SentimentLabel::Negative => label.as_str().red().bold(),
            SentimentLabel::Neutral => label.as_str().yellow().bold(),
        }
    }

    fn percent(value: f64) -> String {
        format!("{:.2}%", value * 100.0)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn statement(&self, result: &StatementSentiment) -> String {
        Self::format_statement(result)
    }

    fn conversation(&self, analysis: &ConversationSentiment) -> String {
        Self::format_conversation(analysis)
    }
}

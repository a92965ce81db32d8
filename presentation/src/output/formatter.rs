//! Output formatter trait

use super::console::ConsoleFormatter;
use sentibot_domain::{ConversationSentiment, OutputFormat, StatementSentiment};

/// Trait for rendering sentiment results
pub trait OutputFormatter {
    /// Render a statement-level result
    fn statement(&self, result: &StatementSentiment) -> String;

    /// Render a conversation-level result
    fn conversation(&self, analysis: &ConversationSentiment) -> String;
}

/// Renders results as pretty JSON records
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn statement(&self, result: &StatementSentiment) -> String {
        ConsoleFormatter::format_json(result)
    }

    fn conversation(&self, analysis: &ConversationSentiment) -> String {
        ConsoleFormatter::format_json(analysis)
    }
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

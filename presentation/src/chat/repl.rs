//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{ReplCommand, parse_command};
use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use sentibot_application::{
    AnalyzeSentimentUseCase, ChatBehavior, ExportAnalysisError, ExportAnalysisUseCase,
    RunChatTurnUseCase,
};
use sentibot_domain::{Conversation, DomainError, TurnLog};
use std::path::PathBuf;
use tracing::warn;

/// Interactive chat REPL
pub struct ChatRepl {
    chat: RunChatTurnUseCase,
    analyze: AnalyzeSentimentUseCase,
    export: ExportAnalysisUseCase,
    behavior: ChatBehavior,
    config: ReplConfig,
    conversation: Conversation,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(
        chat: RunChatTurnUseCase,
        analyze: AnalyzeSentimentUseCase,
        export: ExportAnalysisUseCase,
        behavior: ChatBehavior,
    ) -> Self {
        let conversation = Conversation::new(behavior.bot_name.clone());
        Self {
            chat,
            analyze,
            export,
            behavior,
            config: ReplConfig::default(),
            conversation,
        }
    }

    /// Set REPL configuration
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// The conversation recorded so far
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn behavior(&self) -> &ChatBehavior {
        &self.behavior
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("You: ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if !self.handle_line(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("\nConversation interrupted.");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("\nEnding conversation...");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.config.history_file
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        self.print_session_end();
        Ok(())
    }

    /// Handle one trimmed input line. Returns false when the session should end.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match parse_command(line) {
            ReplCommand::Quit => {
                println!("\nEnding conversation...");
                return false;
            }
            ReplCommand::Analysis => self.print_analysis(),
            ReplCommand::Toggle => {
                let state = if self.behavior.toggle_statement_sentiment() {
                    "ENABLED"
                } else {
                    "DISABLED"
                };
                println!("\nStatement-level sentiment is now {}.\n", state.bold());
            }
            ReplCommand::Export(path) => {
                let path = path
                    .map(PathBuf::from)
                    .unwrap_or_else(|| self.config.export_path.clone());
                self.export_to(path);
            }
            ReplCommand::History => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_history(
                        self.conversation.all_turns(),
                        self.conversation.bot_name()
                    )
                );
                println!();
            }
            ReplCommand::Clear => {
                self.conversation.clear();
                println!("\nConversation cleared.\n");
            }
            ReplCommand::Help => self.print_help(),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type help for available commands");
            }
            ReplCommand::Message(text) => self.process_message(&text),
        }
        true
    }

    fn process_message(&mut self, text: &str) {
        match self.chat.execute(&mut self.conversation, text) {
            Ok(output) => {
                if self.behavior.show_statement_sentiment {
                    println!();
                    print!("{}", ConsoleFormatter::format_statement(&output.sentiment));
                }
                println!(
                    "\n{} {}\n",
                    format!("{}:", self.behavior.bot_name).yellow().bold(),
                    output.reply
                );
            }
            Err(e) => eprintln!("\n{} {}\n", "Error:".red().bold(), e),
        }
    }

    fn print_analysis(&self) {
        match self.analyze.conversation(&self.conversation) {
            Ok(analysis) => {
                println!();
                print!("{}", ConsoleFormatter::format_conversation(&analysis));
                println!();
            }
            Err(DomainError::InvalidInput(_) | DomainError::NoAnalyzableContent) => {
                println!("\nNo messages yet to analyze.\n");
            }
            Err(e) => eprintln!("\n{} {}\n", "Error analyzing conversation:".red().bold(), e),
        }
    }

    fn export_to(&self, path: PathBuf) {
        match self.export.execute(&self.conversation, &path) {
            Ok(output) => println!("\nExport completed: {}\n", output.path.display()),
            Err(ExportAnalysisError::Analysis(e)) if e.is_input_error() => {
                println!("\nNo conversation to export.\n");
            }
            Err(e) => eprintln!("\n{} {}\n", "Export failed:".red().bold(), e),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│   Interactive Chat with Sentiment Analysis  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Chatting with {}.", self.behavior.bot_name.yellow().bold());
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands (with or without a leading /):");
        println!("  analysis        - Conversation-level sentiment so far");
        println!("  toggle          - Show/hide sentiment after each message");
        println!("  export [PATH]   - Save the analysis as JSON");
        println!("  history         - Show the conversation");
        println!("  clear           - Start a new conversation");
        println!("  help            - Show this help");
        println!("  quit, exit      - End the session");
        println!();
    }

    fn print_session_end(&self) {
        let summary = self.conversation.summary(chrono::Utc::now());
        println!();
        print!("{}", ConsoleFormatter::format_summary(&summary));
        self.print_analysis();
        println!("Thank you for using {}!", self.behavior.bot_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::scorer;
    use sentibot_application::{ExportError, SentimentExporter};
    use sentibot_domain::{
        ConversationAggregator, ConversationSentiment, FirstChoice, ResponseSelector,
    };
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MemoryExporter {
        paths: Mutex<Vec<PathBuf>>,
    }

    impl SentimentExporter for MemoryExporter {
        fn export(
            &self,
            _analysis: &ConversationSentiment,
            destination: &Path,
        ) -> Result<PathBuf, ExportError> {
            self.paths.lock().unwrap().push(destination.to_path_buf());
            Ok(destination.to_path_buf())
        }
    }

    fn repl(exporter: Arc<MemoryExporter>) -> ChatRepl {
        let analyze = AnalyzeSentimentUseCase::new(ConversationAggregator::new(scorer()));
        ChatRepl::new(
            RunChatTurnUseCase::new(scorer(), ResponseSelector::new(Arc::new(FirstChoice))),
            analyze.clone(),
            ExportAnalysisUseCase::new(analyze, exporter),
            ChatBehavior::default(),
        )
        .with_config(
            ReplConfig::default()
                .with_history_file(None)
                .with_export_path("default.json"),
        )
    }

    #[test]
    fn test_message_records_user_and_bot_turns() {
        let mut repl = repl(Arc::default());
        assert!(repl.handle_line("this is good"));
        let turns = repl.conversation().all_turns();
        assert_eq!(turns.len(), 2);
        assert!(turns[0].is_human());
        assert_eq!(turns[0].text, "this is good");
        assert!(!turns[1].is_human());
    }

    #[test]
    fn test_commands_are_not_recorded() {
        let mut repl = repl(Arc::default());
        for line in ["analysis", "history", "help", "/nope"] {
            assert!(repl.handle_line(line));
        }
        assert!(repl.conversation().is_empty());
    }

    #[test]
    fn test_toggle_flips_statement_display() {
        let mut repl = repl(Arc::default());
        assert!(repl.behavior().show_statement_sentiment);
        repl.handle_line("toggle");
        assert!(!repl.behavior().show_statement_sentiment);
        repl.handle_line("/toggle");
        assert!(repl.behavior().show_statement_sentiment);
    }

    #[test]
    fn test_export_uses_default_or_given_path() {
        let exporter = Arc::new(MemoryExporter::default());
        let mut repl = repl(exporter.clone());

        repl.handle_line("export");
        assert!(exporter.paths.lock().unwrap().is_empty());

        repl.handle_line("good stuff");
        repl.handle_line("export");
        repl.handle_line("/export other.json");
        assert_eq!(
            exporter.paths.lock().unwrap().as_slice(),
            &[PathBuf::from("default.json"), PathBuf::from("other.json")]
        );
    }

    #[test]
    fn test_clear_and_quit() {
        let mut repl = repl(Arc::default());
        repl.handle_line("bad day");
        repl.handle_line("clear");
        assert!(repl.conversation().is_empty());
        assert!(!repl.handle_line("quit"));
    }
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable report
    Text,
    /// JSON record
    Json,
}

impl From<OutputFormat> for sentibot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => sentibot_domain::OutputFormat::Text,
            OutputFormat::Json => sentibot_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for sentibot
#[derive(Parser, Debug)]
#[command(name = "sentibot")]
#[command(author, version, about = "Chatbot with statement and conversation sentiment analysis")]
#[command(long_about = r#"
Sentibot is a rule-based chatbot that scores the sentiment of every message
you send and analyzes the whole conversation: overall label, message
breakdown and whether the mood improved or declined.

Without arguments an interactive chat starts. Inside the chat:
  analysis        Conversation-level sentiment so far
  toggle          Show/hide sentiment after each message
  export [PATH]   Save the conversation analysis as JSON
  history         Show the conversation so far
  clear           Start over
  help            Show commands
  quit            End the session

Configuration files are loaded from (in priority order):
1. SENTIBOT_* environment variables (e.g. SENTIBOT_SENTIMENT__TREND_DELTA=0.2)
2. --config <path>       Explicit config file
3. ./sentibot.toml       Project-level config
4. ~/.config/sentibot/config.toml   Global config

Example:
  sentibot "I love your service!"
  sentibot --transcript chat.json --output json
  sentibot --no-statement
"#)]
pub struct Cli {
    /// Score a single statement and exit
    pub text: Option<String>,

    /// Analyze a JSON array of turns and exit
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub transcript: Option<PathBuf>,

    /// Output format for one-shot analysis
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Export destination (also written after a transcript analysis)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Hide statement-level sentiment in chat
    #[arg(long)]
    pub no_statement: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

//! CLI entrypoint for sentibot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use sentibot_application::{
    AnalyzeSentimentUseCase, ConversationLogger, ExportAnalysisUseCase, NoConversationLogger,
    RunChatTurnUseCase,
};
use sentibot_domain::{Conversation, ConversationAggregator, OutputFormat, ResponseSelector};
use sentibot_infrastructure::{
    ConfigLoader, FileConfig, JsonFileExporter, JsonlConversationLogger, RandomChooser,
    expand_home, lexicon_scorer, load_transcript,
};
use sentibot_presentation::{ChatRepl, Cli, ReplConfig, formatter_for};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.log_dir.as_deref());

    info!("Starting sentibot");

    if cli.show_config {
        for source in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("  {}", source);
        }
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let thresholds = config
        .sentiment
        .to_thresholds()
        .0
        .context("Invalid [sentiment] thresholds")?;
    let scorer = lexicon_scorer(thresholds);
    let logger = conversation_logger(&config);

    let analyze = AnalyzeSentimentUseCase::new(ConversationAggregator::new(scorer.clone()))
        .with_conversation_logger(logger.clone());
    let export = ExportAnalysisUseCase::new(analyze.clone(), Arc::new(JsonFileExporter::new()))
        .with_conversation_logger(logger.clone());

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let export_path = cli
        .export
        .clone()
        .unwrap_or_else(|| expand_home(config.output.export_path()));

    // Single statement mode
    if let Some(text) = &cli.text {
        let result = analyze.statement(text)?;
        print!("{}", formatter_for(format).statement(&result));
        println!();
        return Ok(());
    }

    // Transcript mode
    if let Some(path) = &cli.transcript {
        let mut conversation = Conversation::new(config.chat.bot_name.clone());
        for turn in load_transcript(path)? {
            conversation.push(turn);
        }

        let analysis = analyze.conversation(&conversation)?;
        print!("{}", formatter_for(format).conversation(&analysis));
        println!();

        if cli.export.is_some() {
            let output = export.execute(&conversation, &export_path)?;
            eprintln!("Exported analysis to {}", output.path.display());
        }
        return Ok(());
    }

    // Chat mode
    let (mut behavior, _) = config.chat.to_behavior();
    if cli.no_statement {
        behavior = behavior.with_statement_sentiment(false);
    }

    let repl_config = ReplConfig::default()
        .with_history_file(
            config
                .chat
                .history_file
                .as_deref()
                .map(expand_home)
                .or_else(ReplConfig::default_history_file),
        )
        .with_export_path(export_path);

    let chat = RunChatTurnUseCase::new(scorer, ResponseSelector::new(Arc::new(RandomChooser)))
        .with_conversation_logger(logger);

    let mut repl = ChatRepl::new(chat, analyze, export, behavior).with_config(repl_config);
    repl.run()?;

    Ok(())
}

/// Filter directive for a `-v` count
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Console logging on stderr plus an optional daily-rotated file under `log_dir`
fn init_logging(verbose: u8, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(expand_home(dir), "sentibot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_filter(verbose)))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

/// Report config issues; error-severity issues abort startup
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s); see messages above", errors);
    }
    Ok(())
}

/// JSONL event log when `[logging] conversation_log` is set
fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = config.logging.conversation_log.as_deref() else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(expand_home(path)) {
        Some(logger) => {
            info!("Logging conversation events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!(
                "Conversation log disabled: could not open {}",
                Path::new(path).display()
            );
            Arc::new(NoConversationLogger)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_by_verbosity() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(7), "trace");
    }
}

//! Configuration file loading for sentibot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SENTIBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./sentibot.toml` or `./.sentibot.toml`
//! 4. Global: `$XDG_CONFIG_HOME/sentibot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileSentimentConfig,
    expand_home,
};
pub use loader::ConfigLoader;

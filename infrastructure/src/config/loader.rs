//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["sentibot.toml", ".sentibot.toml"];
const ENV_PREFIX: &str = "SENTIBOT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SENTIBOT_` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./sentibot.toml` or `./.sentibot.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/sentibot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sentibot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut sources = Vec::new();

        if let Some(path) = config_path {
            let found = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("[{}] Explicit: {}", found, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => sources.push(format!("[FOUND] Project: {}", path.display())),
            None => sources.push("[     ] Project: ./sentibot.toml or ./.sentibot.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let found = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("[{}] Global:  {}", found, path.display()));
        }

        sources.push(format!("[     ] Env:     {}*", ENV_PREFIX));
        sources.push("[     ] Default: built-in defaults".to_string());
        sources
    }
}

//! Configuration for mad

use eyre::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Value to start the recursion from
    #[serde(default = "default_start")]
    pub start: u32,

    /// Log level used when `--log-level` is not given
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_start() -> u32 {
    crate::DEFAULT_START
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: default_start(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    ///
    /// No default locations are searched; a plain `mad` run reads nothing.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let Some(config_path) = path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the recursion cannot handle
    pub fn validate(&self) -> Result<()> {
        eyre::ensure!(
            self.start <= crate::MAX_START,
            "start {} exceeds maximum of {}",
            self.start,
            crate::MAX_START
        );
        Ok(())
    }
}

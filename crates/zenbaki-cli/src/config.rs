//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$ZENBAKI_CONFIG` environment variable
//! 2. `~/.config/zenbaki/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use zenbaki::practice::Topic;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub quiz: QuizConfig,
    pub display: DisplayConfig,
}

/// Practice quiz settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Answered problems per quiz.
    pub rounds: u32,
    /// Topic names to draw from. Empty means every topic.
    pub topics: Vec<String>,
    /// Fixed seed for a reproducible quiz.
    pub seed: Option<u64>,
}

/// Calculator output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places printed for results.
    pub decimals: usize,
}

// --- Defaults ---

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            topics: Vec::new(),
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

impl QuizConfig {
    /// Parses the configured topic names.
    pub fn parsed_topics(&self) -> Result<Vec<Topic>> {
        self.topics
            .iter()
            .map(|name| {
                name.parse::<Topic>()
                    .with_context(|| format!("invalid [quiz] topics entry `{name}`"))
            })
            .collect()
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    let path = config_path();

    if let Some(p) = &path {
        if p.exists() {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
            tracing::debug!(path = %p.display(), "loaded config");
            return Ok(config);
        }
    }

    Ok(Config::default())
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("ZENBAKI_CONFIG") {
        return Some(PathBuf::from(p));
    }

    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("zenbaki")
            .join("config.toml")
    })
}

/// Show the active config path (for `zenbaki config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}

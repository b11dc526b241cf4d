use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Output file extension for extraction reports
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Pretty-print the JSON report
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,

    /// Heuristic classifier tuning
    #[serde(default)]
    pub heuristic: HeuristicConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_extension: default_output_extension(),
            pretty_output: default_pretty_output(),
            heuristic: HeuristicConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_extension.is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }
        self.heuristic.validate()
    }
}

/// Tuning knobs for the heuristic line classifier.
///
/// The defaults work for standard screenplay formatting; they exist as
/// configuration so unusual page extractions (long cue names, deep title
/// pages) can be accommodated without code changes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HeuristicConfig {
    // @field: Longest line still accepted as a character cue
    #[serde(default = "default_max_character_name_len")]
    pub max_character_name_len: usize,

    // @field: How many leading lines the title scan inspects
    #[serde(default = "default_title_scan_lines")]
    pub title_scan_lines: usize,

    // @field: Window at the document top where title-page residue is dropped
    #[serde(default = "default_metadata_skip_lines")]
    pub metadata_skip_lines: usize,

    // @field: Extra vocabulary excluded from title/author candidates
    #[serde(default)]
    pub extra_excluded_terms: Vec<String>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            max_character_name_len: default_max_character_name_len(),
            title_scan_lines: default_title_scan_lines(),
            metadata_skip_lines: default_metadata_skip_lines(),
            extra_excluded_terms: Vec::new(),
        }
    }
}

impl HeuristicConfig {
    /// Validate tuning values
    pub fn validate(&self) -> Result<()> {
        if self.max_character_name_len == 0 {
            return Err(anyhow!("max_character_name_len must be at least 1"));
        }
        if self.title_scan_lines == 0 {
            return Err(anyhow!("title_scan_lines must be at least 1"));
        }
        Ok(())
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    // @returns: Corresponding log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_extension() -> String {
    "json".to_string()
}

fn default_pretty_output() -> bool {
    true
}

fn default_max_character_name_len() -> usize {
    30
}

fn default_title_scan_lines() -> usize {
    10
}

fn default_metadata_skip_lines() -> usize {
    5
}

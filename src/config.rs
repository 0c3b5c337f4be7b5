//! Configuration for the cleaner and the viewer.
//!
//! Every field has a default, so an empty or partial TOML file is valid:
//!
//! ```toml
//! [cleaner]
//! input = "data/titles.csv"
//! current_year = 2025
//!
//! [viewer]
//! top_n = 20
//! ```

use crate::viewer::queries::{DEFAULT_RECOMMEND_LIMIT, DEFAULT_TOLERANCE, DEFAULT_TOP_N};
use crate::viewer::DEFAULT_POSTER_BASE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings of a cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Raw titles CSV
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Cleaned CSV written by the run
    #[serde(default = "default_cleaned_path")]
    pub output: PathBuf,

    /// Text report written by the run
    #[serde(default = "default_report")]
    pub report: PathBuf,

    /// Reference year for content_age; the current year when unset
    #[serde(default)]
    pub current_year: Option<i32>,
}

fn default_input() -> PathBuf {
    PathBuf::from("titles.csv")
}

fn default_cleaned_path() -> PathBuf {
    PathBuf::from("cleaned_netflix.csv")
}

fn default_report() -> PathBuf {
    PathBuf::from("cleaning_log.txt")
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_cleaned_path(),
            report: default_report(),
            current_year: None,
        }
    }
}

/// Settings of the dashboard and headless queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Cleaned CSV to load
    #[serde(default = "default_cleaned_path")]
    pub data: PathBuf,

    /// Length of the highest-rated list
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Maximum number of recommendations
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    /// Maximum IMDb score distance for a recommendation
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Base URL of the placeholder posters
    #[serde(default = "default_poster_base")]
    pub poster_base: String,

    /// Suggested file name for subset exports
    #[serde(default = "default_export_name")]
    pub export_name: String,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_recommend_limit() -> usize {
    DEFAULT_RECOMMEND_LIMIT
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_poster_base() -> String {
    DEFAULT_POSTER_BASE.to_string()
}

fn default_export_name() -> String {
    "filtered_netflix_data.csv".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data: default_cleaned_path(),
            top_n: default_top_n(),
            recommend_limit: default_recommend_limit(),
            tolerance: default_tolerance(),
            poster_base: default_poster_base(),
            export_name: default_export_name(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cleaner: CleanerConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_toml(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.viewer.top_n, 10);
        assert_eq!(config.viewer.recommend_limit, 5);
        assert_eq!(config.cleaner.output, PathBuf::from("cleaned_netflix.csv"));
        assert_eq!(config.cleaner.output, config.viewer.data);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            "[cleaner]\ninput = \"raw/titles.csv\"\ncurrent_year = 2024\n\n[viewer]\ntolerance = 0.5\n",
        )
        .unwrap();
        assert_eq!(config.cleaner.input, PathBuf::from("raw/titles.csv"));
        assert_eq!(config.cleaner.current_year, Some(2024));
        assert_eq!(config.cleaner.report, PathBuf::from("cleaning_log.txt"));
        assert_eq!(config.viewer.tolerance, 0.5);
        assert_eq!(config.viewer.top_n, 10);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(matches!(
            Config::from_toml_str("[viewer]\ntop_n = \"many\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::from_toml(Path::new("no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

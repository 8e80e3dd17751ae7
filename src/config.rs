//! Application settings loaded from TOML.
//!
//! Lookup order:
//! 1. `$DAY_PROBABILITY_CONFIG` (the file must exist)
//! 2. `./day_probability.toml` when present
//! 3. Built-in defaults

use crate::engine::{DEFAULT_CEILING, MAX_CEILING};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CONFIG_ENV_VAR: &str = "DAY_PROBABILITY_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "day_probability.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Upper bound of target numbers; fixed for the process lifetime.
    pub ceiling: u32,
    /// Number preselected in the dropdown.
    pub default_selection: u32,
    pub dark_mode: bool,
    /// Whether the presentation layer shows the bar chart.
    pub show_chart: bool,
    /// Fixed heading seed; the wall clock is used when absent.
    pub heading_seed: Option<u64>,
    /// Suggested file name in the CSV save dialog.
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            default_selection: 60,
            dark_mode: false,
            show_chart: true,
            heading_seed: None,
            export_file_name: "day_probabilities.csv".to_string(),
        }
    }
}

impl Settings {
    /// Resolve and load settings using the standard lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }

        info!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&text, path)?;

        info!(path = %path.display(), ceiling = settings.ceiling, "settings loaded");
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    /// Parse and validate TOML; `origin` names the source in errors.
    fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CEILING).contains(&self.ceiling) {
            return Err(ConfigError::Invalid(format!(
                "ceiling must be between 1 and {}, got {}",
                MAX_CEILING, self.ceiling
            )));
        }
        if !(1..=self.ceiling).contains(&self.default_selection) {
            return Err(ConfigError::Invalid(format!(
                "default_selection must be between 1 and {}, got {}",
                self.ceiling, self.default_selection
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "export_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

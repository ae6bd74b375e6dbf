//! Application settings loading from config.toml
//!
//! This module provides functionality to load optional application settings
//! from a TOML configuration file. Everything in the file is optional; the
//! database layer falls back to environment variables and built-in defaults
//! for any key that is absent.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Database URL override (e.g., `sqlite://data/finance_tracker.sqlite?mode=rwc`)
    pub database_url: Option<String>,
}

/// Loads application settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads application settings from the default location (./config.toml)
pub fn load_default_settings() -> Result<Settings> {
    load_settings("config.toml")
}

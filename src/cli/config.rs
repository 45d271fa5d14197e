//! TOML settings file support.
//!
//! Instead of passing flags on every invocation, defaults can live in a
//! settings file selected with `--config`:
//!
//! ```toml
//! # chromcols.toml
//! [network]
//! timeout_secs = 10
//!
//! [output]
//! pretty = true
//! sorted = false
//! ```
//!
//! Explicit CLI flags always win over settings-file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root settings structure for chromcols.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Network-related settings.
    #[serde(default)]
    pub network: NetworkSettings,

    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Settings for the metadata request.
#[derive(Debug, Default, Deserialize)]
pub struct NetworkSettings {
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Settings for the serialized column list.
#[derive(Debug, Default, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print the JSON output.
    pub pretty: Option<bool>,

    /// Sort entries by identifier instead of source order.
    pub sorted: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse settings from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

//! Defaults file loaded from TOML.
//!
//! Every key is optional. Values found here sit between the built-in
//! defaults and explicit command-line flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::options::{PasswordConfig, ValidationError};
use crate::generator::Sampling;

/// Errors raised while loading the defaults file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileRead(String),
    /// The file is not valid TOML or has values of the wrong type.
    #[error("failed to parse config file: {0}")]
    Parse(String),
    /// The `[generator]` section fails validation.
    #[error("invalid generator settings in config file: {0}")]
    Invalid(#[from] ValidationError),
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Password and sampling defaults.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Clipboard defaults.
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Keys understood in each section.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    (
        "generator",
        &[
            "length",
            "exclude_lower",
            "exclude_upper",
            "exclude_digits",
            "exclude_symbols",
            "sampling",
        ],
    ),
    ("clipboard", &["copy", "clear_after_secs"]),
];

/// `[generator]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Password options applied when no flag overrides them.
    #[serde(flatten)]
    pub password: PasswordConfig,
    /// Index sampling strategy.
    #[serde(default)]
    pub sampling: Sampling,
}

/// `[clipboard]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy instead of printing.
    pub copy: bool,
    /// Seconds to wait before clearing the clipboard (0 disables).
    pub clear_after_secs: u64,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parses and validates TOML content.
    ///
    /// Unknown sections and keys are ignored with a warning.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        for key in unknown_keys(&table) {
            tracing::warn!(key = %key, "ignoring unknown config key");
        }

        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.generator.password.validate()?;
        Ok(config)
    }
}

/// Dotted names of entries in `table` that no section understands.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (section, value) in table {
        let known = KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == section.as_str())
            .map(|(_, keys)| *keys);

        match (known, value.as_table()) {
            (Some(keys), Some(entries)) => unknown.extend(
                entries
                    .keys()
                    .filter(|k| !keys.contains(&k.as_str()))
                    .map(|k| format!("{}.{}", section, k)),
            ),
            (Some(_), None) => {}
            (None, _) => unknown.push(section.clone()),
        }
    }
    unknown
}

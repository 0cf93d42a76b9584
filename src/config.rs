use std::path::Path;

use serde::Deserialize;

use crate::error::{CensusError, Result};

pub const DEFAULT_CONFIG_FILE: &str = ".comment-census.toml";

/// Optional TOML configuration declaring extra languages.
///
/// ```toml
/// [[language]]
/// name = "Velocity"
/// extensions = ["vm"]
/// single_line = ['##']
/// block = [{ begin = '#\*', end = '\*#' }]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub language: Vec<LanguageConfig>,
}

/// A user-defined language entry. Patterns are regex fragments; validity is
/// checked when profiles are built, before any file is scanned.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    pub name: String,
    pub extensions: Vec<String>,
    #[serde(default)]
    pub single_line: Vec<String>,
    #[serde(default)]
    pub block: Vec<BlockConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BlockConfig {
    pub begin: String,
    pub end: String,
}

impl Config {
    /// Parse a configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CensusError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist; the default file is loaded only when
    /// present, otherwise an empty configuration applies.
    ///
    /// # Errors
    /// Returns an error if an explicitly given path cannot be read, or if
    /// either file fails to parse.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

//! Formatter configuration
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```toml
//! short_string_len = 7
//! expand_top_level = true
//! int_base = "hex"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display base for integer leaf values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntBase {
    #[default]
    Decimal,
    Hex,
    Octal,
    Binary,
}

/// Knobs for the multi-line layout heuristic and leaf rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Strings longer than this push their container onto multiple lines
    pub short_string_len: usize,
    /// Always expand a non-empty top-level container in multi-line mode
    pub expand_top_level: bool,
    pub int_base: IntBase,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            short_string_len: 7,
            expand_top_level: true,
            int_base: IntBase::Decimal,
        }
    }
}

impl FormatOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading format options from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

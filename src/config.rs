//! Simulator configuration.
//!
//! Loaded from a TOML file when one is given on the command line; every key
//! has a built-in default so the file (and any key in it) is optional.
//! Sizes are written as `0x`-prefixed hex strings.

use std::fs;

use serde::Deserialize;

use crate::common::SimError;
use crate::core::memory::DEFAULT_MEMORY_SIZE;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace lines to stderr.
    #[serde(default)]
    pub trace_instructions: bool,
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    /// Data memory size in bytes, as a hex string.
    #[serde(default = "default_data_size")]
    pub data_size: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_size: default_data_size(),
        }
    }
}

impl MemoryConfig {
    /// Parses the configured data memory size, falling back to 1 MiB.
    pub fn data_size_val(&self) -> usize {
        let s = self.data_size.trim_start_matches("0x");
        usize::from_str_radix(s, 16).unwrap_or(DEFAULT_MEMORY_SIZE)
    }
}

fn default_data_size() -> String {
    "0x100000".to_string()
}

impl Config {
    /// Loads a configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self, SimError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SimError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }
}

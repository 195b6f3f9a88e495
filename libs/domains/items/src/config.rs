//! Item store selection from the environment.

use core_config::{ConfigError, FromEnv, env_or_default};
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Where items are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Process memory, lost on restart
    #[default]
    Memory,
    /// A single JSON document on disk
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Document path, only read by the file backend
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            data_file: PathBuf::from("data.json"),
        }
    }
}

impl FromEnv for StoreConfig {
    /// - ITEMS_STORE: `memory` (default) or `file`
    /// - ITEMS_DATA_FILE: defaults to `data.json`
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("ITEMS_STORE", "memory");
        let backend = StoreBackend::from_str(raw.trim()).map_err(|_| ConfigError::ParseError {
            key: "ITEMS_STORE".to_string(),
            details: format!("expected 'memory' or 'file', got '{}'", raw),
        })?;

        Ok(Self {
            backend,
            data_file: PathBuf::from(env_or_default("ITEMS_DATA_FILE", "data.json")),
        })
    }
}

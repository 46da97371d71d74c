//! Configuration loaded from a TOML file.
//!
//! Lookup order: the `BLOCKFALL_CONFIG` environment variable, then
//! `<config_dir>/blockfall/config.toml`. A missing file means defaults; a file
//! that exists but does not parse is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::DropTiming;
use crate::input::latch::DEFAULT_RELEASE_TIMEOUT_MS;
use crate::types::{FAST_DROP_MS, NORMAL_DROP_MS};

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for the shape generator; random when absent
    pub seed: Option<u32>,
    /// Gravity interval in ms
    pub normal_drop_ms: u32,
    /// Gravity interval in ms while soft drop is held
    pub fast_drop_ms: u32,
    /// Release soft drop after this long without a key press, on terminals
    /// that do not report key releases
    pub soft_drop_release_ms: u32,
    /// Log output; the terminal itself is owned by the renderer
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            normal_drop_ms: NORMAL_DROP_MS,
            fast_drop_ms: FAST_DROP_MS,
            soft_drop_release_ms: DEFAULT_RELEASE_TIMEOUT_MS,
            log_file: PathBuf::from("blockfall.log"),
        }
    }
}

impl AppConfig {
    pub fn timing(&self) -> DropTiming {
        DropTiming {
            normal_ms: self.normal_drop_ms,
            fast_ms: self.fast_drop_ms,
        }
    }

    /// Parse TOML text and validate it.
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normal_drop_ms == 0 || self.fast_drop_ms == 0 {
            return Err(ConfigError::Invalid("drop intervals must be non-zero"));
        }
        Ok(())
    }
}

/// Resolve the config file path
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("blockfall").join("config.toml"),
        None => PathBuf::from("blockfall.toml"),
    }
}

/// Load from the resolved path
pub fn load() -> Result<AppConfig, ConfigError> {
    load_from(&config_path())
}

/// Load from `path`, falling back to defaults when the file does not exist
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => AppConfig::from_toml_str(&contents, path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

//! Consumer-key configuration.
//!
//! The application consumer key is static, process-wide configuration: it is
//! resolved once at startup and passed into the fetcher by value. Resolution
//! precedence (highest first):
//!
//! 1. CLI flag (`--consumer-key`)
//! 2. `POCKETSYNC_CONSUMER_KEY` environment variable
//! 3. `consumer_key` in the config file
//!    (Linux/macOS: `~/.config/pocketsync/config.toml`)

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::AppPaths;
use crate::error::{PocketError, Result};

/// Environment variable holding the consumer key.
pub const ENV_CONSUMER_KEY: &str = "POCKETSYNC_CONSUMER_KEY";

/// On-disk config file shape.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Application consumer key issued by the provider.
    pub consumer_key: Option<String>,
}

impl ConfigFile {
    /// Load the config file, treating a missing file as empty config.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| PocketError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Where the consumer key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
        }
    }
}

/// Resolve the consumer key from flag, environment, and config file.
///
/// # Errors
///
/// Returns [`PocketError::MissingConsumerKey`] if no source provides a
/// non-empty value, or a config error if the file is unreadable.
pub fn resolve_consumer_key(flag: Option<String>) -> Result<(String, ConfigSource)> {
    let env = std::env::var(ENV_CONSUMER_KEY).ok();
    let paths = AppPaths::new();
    resolve_consumer_key_from(flag, env, &paths.config_file())
}

/// Precedence logic, split out so tests can supply env and path directly.
pub(crate) fn resolve_consumer_key_from(
    flag: Option<String>,
    env: Option<String>,
    config_path: &Path,
) -> Result<(String, ConfigSource)> {
    if let Some(key) = non_empty(flag) {
        return Ok((key, ConfigSource::Cli));
    }
    if let Some(key) = non_empty(env) {
        return Ok((key, ConfigSource::Env));
    }
    let file = ConfigFile::load(config_path)?;
    if let Some(key) = non_empty(file.consumer_key) {
        return Ok((key, ConfigSource::ConfigFile));
    }
    Err(PocketError::MissingConsumerKey)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

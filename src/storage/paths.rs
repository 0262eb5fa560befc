//! Application paths for configuration.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application paths.
pub struct AppPaths {
    /// Configuration directory.
    pub config: PathBuf,
}

impl AppPaths {
    /// Create paths for the pocketsync application.
    #[must_use]
    pub fn new() -> Self {
        ProjectDirs::from("io", "pocketsync", "pocketsync").map_or_else(
            || Self {
                config: PathBuf::from(".config/pocketsync"),
            },
            |proj_dirs| Self {
                config: proj_dirs.config_dir().to_path_buf(),
            },
        )
    }

    /// Path to the config file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

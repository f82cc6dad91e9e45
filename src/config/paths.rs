//! Path management for Pennywise
//!
//! ## Path Resolution Order
//!
//! 1. `PENNYWISE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/pennywise` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PennywiseError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "PENNYWISE_CONFIG_DIR";

/// Manages all paths used by Pennywise
#[derive(Debug, Clone)]
pub struct PennywisePaths {
    base_dir: PathBuf,
}

impl PennywisePaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PennywiseError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "pennywise")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    PennywiseError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create PennywisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), PennywiseError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            PennywiseError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

//! User settings for gbill
//!
//! The settings record maps the ledger to its location on disk. It is loaded
//! once at startup and handed to the ledger service explicitly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::GbillPaths;
use crate::error::GbillError;

/// Persisted settings for gbill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Location of the ledger file
    pub database: PathBuf,
}

fn default_schema_version() -> u32 {
    1
}

impl Settings {
    /// Create settings pointing at a ledger file
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            schema_version: default_schema_version(),
            database: database.into(),
        }
    }

    /// Load settings from disk
    ///
    /// Fails with a configuration error when gbill has not been initialized.
    pub fn load(paths: &GbillPaths) -> Result<Self, GbillError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Err(GbillError::Config(
                "Config file not found. Please run \"gbill init\"".into(),
            ));
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| GbillError::Config(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| GbillError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    ///
    /// The config directory must already exist.
    pub fn save(&self, paths: &GbillPaths) -> Result<(), GbillError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GbillError::ConfigWrite(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GbillError::ConfigWrite(format!("Failed to write settings file: {}", e)))
    }
}

//! Path management for gbill
//!
//! ## Path Resolution Order
//!
//! 1. `GBILL_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory for `gbill` (e.g. `~/.config/gbill`)

use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};

use crate::error::GbillError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "GBILL_CONFIG_DIR";

/// Manages all paths used by gbill
#[derive(Debug, Clone)]
pub struct GbillPaths {
    /// Directory holding the settings file and the audit log
    base_dir: PathBuf,
}

impl GbillPaths {
    /// Create a new GbillPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, GbillError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "gbill")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    GbillError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create GbillPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the config directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), GbillError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            GbillError::DirectoryCreate(format!("{}: {}", self.base_dir.display(), e))
        })
    }

    /// Check if gbill has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Default ledger location: `~/.<home dir name>_gbill.json`
pub fn default_database_path() -> Result<PathBuf, GbillError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| GbillError::Config("Could not determine the home directory".into()))?;
    let home = dirs.home_dir();
    let stem = home
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(home.join(format!(".{}_gbill.json", stem)))
}

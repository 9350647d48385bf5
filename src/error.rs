//! Custom error types for gbill
//!
//! Every failure in the ledger, storage and bootstrap layers is returned as a
//! `GbillError` value. Only the binary turns them into messages and exit codes.

use std::path::Path;

use thiserror::Error;

/// The main error type for gbill operations
#[derive(Error, Debug)]
pub enum GbillError {
    /// The config directory could not be created
    #[error("config directory error: {0}")]
    DirectoryCreate(String),

    /// The config file could not be created
    #[error("config file error: {0}")]
    FileCreate(String),

    /// The settings record could not be written
    #[error("config write error: {0}")]
    ConfigWrite(String),

    /// Settings are missing or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    /// The ledger file could not be read
    #[error("database read error: {0}")]
    Read(String),

    /// The ledger file is not a valid bill list
    #[error("database parse error: {0}")]
    Parse(String),

    /// The ledger file could not be written
    #[error("database write error: {0}")]
    Write(String),

    /// No bill at the given 1-based position
    #[error("Bill not found: #{id}")]
    NotFound { id: usize },

    /// Validation errors for bill fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors outside the ledger file (audit log, exports)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors outside the ledger file
    #[error("JSON error: {0}")]
    Json(String),
}

impl GbillError {
    /// Create a "not found" error for a bill position
    pub fn bill_not_found(id: usize) -> Self {
        Self::NotFound { id }
    }

    /// Create a read error for a path
    pub fn read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Read(format!("{}: {}", path.display(), err))
    }

    /// Create a parse error for a path
    pub fn parse(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Parse(format!("{}: {}", path.display(), err))
    }

    /// Create a write error for a path
    pub fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Write(format!("{}: {}", path.display(), err))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for gbill operations
pub type GbillResult<T> = Result<T, GbillError>;

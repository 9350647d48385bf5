//! Bill repository for JSON storage
//!
//! The ledger is one JSON array of bills. It is always loaded and saved as a
//! whole; nothing is cached between calls.

use std::path::{Path, PathBuf};

use crate::error::GbillError;
use crate::models::Bill;

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
#[derive(Debug, Clone)]
pub struct BillRepository {
    path: PathBuf,
}

impl BillRepository {
    /// Create a repository backed by the given ledger file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ledger file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the ledger file holds a readable list of bills
    pub fn is_valid(&self) -> bool {
        self.read_all().is_ok()
    }

    /// Write an empty ledger
    pub fn init(&self) -> Result<(), GbillError> {
        self.write_all(&[])
    }

    /// Load every bill in ledger order
    pub fn read_all(&self) -> Result<Vec<Bill>, GbillError> {
        read_json(&self.path)
    }

    /// Replace the ledger with the given bills
    pub fn write_all(&self, bills: &[Bill]) -> Result<(), GbillError> {
        write_json_atomic(&self.path, bills)
    }
}

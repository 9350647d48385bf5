//! Audit log storage
//!
//! The log is a JSONL file: one serialized `AuditEntry` per line, appended
//! after every ledger change and never rewritten.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{GbillError, GbillResult};

use super::entry::AuditEntry;

/// Append-only store for ledger change entries
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append entries in order with a single write
    pub fn append(&self, entries: &[AuditEntry]) -> GbillResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut lines = String::new();
        for entry in entries {
            let json = serde_json::to_string(entry)
                .map_err(|e| GbillError::Json(format!("audit entry: {}", e)))?;
            lines.push_str(&json);
            lines.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(lines.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.io_error(e))
    }

    /// Every entry, oldest first; a log that was never written is empty
    pub fn read_all(&self) -> GbillResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| {
                    GbillError::Json(format!("audit log line {}: {}", i + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> GbillResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    fn io_error(&self, err: std::io::Error) -> GbillError {
        GbillError::Io(format!("{}: {}", self.log_path.display(), err))
    }
}

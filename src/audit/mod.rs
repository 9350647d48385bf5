//! Audit logging for gbill
//!
//! Every change to the ledger is recorded in an append-only audit log with
//! before/after snapshots of the affected bill.
//!
//! - `AuditEntry`: one logged operation with timestamp and bill snapshots.
//! - `AuditLogger`: appends entries to the log file as JSON lines.
//! - `bill_diff`: short description of which bill fields changed.

mod diff;
mod entry;
mod logger;

pub use diff::bill_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Bill;

use super::diff::bill_diff;

/// Types of ledger operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Bill was added
    Create,
    /// Bill was edited
    Update,
    /// Bill was removed
    Delete,
    /// Whole ledger was emptied
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single audit log entry
///
/// `bill_id` is the 1-based ledger position at the time of the operation.
/// Positions shift on removal, so the before/after snapshots are what
/// identify a bill in the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Ledger position of the affected bill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_id: Option<usize>,

    /// Bill before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Bill after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, bill_id: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            bill_id,
            before: None,
            after: None,
            summary: None,
        }
    }

    /// Entry for a bill appended at `bill_id`
    pub fn create(bill_id: usize, bill: &Bill) -> Self {
        Self {
            after: serde_json::to_value(bill).ok(),
            summary: Some(bill.to_string()),
            ..Self::new(Operation::Create, Some(bill_id))
        }
    }

    /// Entry for an edited bill
    pub fn update(bill_id: usize, before: &Bill, after: &Bill) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary: bill_diff(before, after),
            ..Self::new(Operation::Update, Some(bill_id))
        }
    }

    /// Entry for a removed bill
    pub fn delete(bill_id: usize, bill: &Bill) -> Self {
        Self {
            before: serde_json::to_value(bill).ok(),
            summary: Some(bill.to_string()),
            ..Self::new(Operation::Delete, Some(bill_id))
        }
    }

    /// Entry for emptying the ledger
    pub fn clear(removed: usize) -> Self {
        Self {
            summary: Some(format!("{} bill(s) removed", removed)),
            ..Self::new(Operation::Clear, None)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = self.bill_id {
            output.push_str(&format!(" bill #{}", id));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!(": {}", summary));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill() -> Bill {
        Bill::new(vec!["Ann".into(), "Bo".into()], "Pat", 90.0)
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Clear.to_string(), "CLEAR");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(3, &bill());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.bill_id, Some(3));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["Payer"], "Pat");
    }

    #[test]
    fn test_update_entry() {
        let before = bill();
        let mut after = bill();
        after.amount = 120.0;

        let entry = AuditEntry::update(1, &before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.summary.as_deref(), Some("Amount: $90.00 -> $120.00"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(2, &bill());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_clear_entry() {
        let entry = AuditEntry::clear(4);
        assert_eq!(entry.bill_id, None);
        assert_eq!(entry.summary.as_deref(), Some("4 bill(s) removed"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(1, &bill());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.bill_id, Some(1));
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::delete(5, &bill()).format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("bill #5"));
        assert!(formatted.contains("paid by Pat"));
    }
}

//! Diff generation for audit logging
//!
//! Describes which fields of a bill changed between two snapshots.

use crate::models::Bill;

/// Generate a human-readable diff between two versions of a bill
///
/// Field names match the ledger file. Returns `None` when nothing changed.
pub fn bill_diff(before: &Bill, after: &Bill) -> Option<String> {
    let mut changes = Vec::new();

    if before.participants != after.participants {
        changes.push(format!(
            "Participant: {} -> {}",
            format_names(&before.participants),
            format_names(&after.participants)
        ));
    }

    if before.payer != after.payer {
        changes.push(format!("Payer: \"{}\" -> \"{}\"", before.payer, after.payer));
    }

    if before.amount != after.amount {
        changes.push(format!(
            "Amount: ${:.2} -> ${:.2}",
            before.amount, after.amount
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_names(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}

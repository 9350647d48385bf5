//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::error::GbillResult;

/// Handle `gbill log`, printing the most recent ledger changes
pub fn handle_log(logger: &AuditLogger, limit: usize) -> GbillResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

//! Split CLI commands
//!
//! Shows how much each person owes across the ledger.

use crate::display::{format_balances, format_owed};
use crate::error::GbillResult;
use crate::services::LedgerService;

/// Handle `gbill calculate`
pub fn handle_calculate(service: &LedgerService) -> GbillResult<()> {
    let owed = service.calculate()?;
    println!("{}", format_owed(&owed).trim_end());
    Ok(())
}

/// Handle `gbill balance`
pub fn handle_balance(service: &LedgerService) -> GbillResult<()> {
    let balances = service.balances()?;
    println!("{}", format_balances(&balances).trim_end());
    if !balances.is_empty() {
        println!("\n+ is owed money, - owes money");
    }
    Ok(())
}

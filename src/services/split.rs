//! Split calculations over a list of bills
//!
//! Every bill is divided evenly among its participants plus the payer. The
//! payer's own share is absorbed, so only the other participants owe money.

use std::collections::BTreeMap;

use crate::models::Bill;

/// Name used for the creditor of bills recorded without a payer
pub const UNKNOWN_PAYER: &str = "(unknown)";

/// Total each participant owes across all bills, keyed by name as stored
pub fn amounts_owed(bills: &[Bill]) -> BTreeMap<String, f64> {
    let mut owed = BTreeMap::new();

    for bill in bills {
        let share = bill.share();
        for name in bill.debtors() {
            *owed.entry(name.to_string()).or_insert(0.0) += share;
        }
    }

    owed
}

/// Net position of every person across all bills
///
/// Positive means the person is owed money, negative means they owe. The
/// values sum to zero up to float rounding.
pub fn net_balances(bills: &[Bill]) -> BTreeMap<String, f64> {
    let mut balances = BTreeMap::new();

    for bill in bills {
        let share = bill.share();
        let mut credited = 0.0;

        for name in bill.debtors() {
            *balances.entry(name.to_string()).or_insert(0.0) -= share;
            credited += share;
        }

        let payer = if bill.payer.is_empty() {
            UNKNOWN_PAYER
        } else {
            bill.payer.as_str()
        };
        *balances.entry(payer.to_string()).or_insert(0.0) += credited;
    }

    balances
}

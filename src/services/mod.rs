//! Service layer for gbill
//!
//! The service layer provides the ledger operations on top of the storage
//! layer, handling validation, normalization and split calculations.

pub mod import;
pub mod ledger;
pub mod split;

pub use import::import_bills_csv;
pub use ledger::{BillEdit, LedgerService};
pub use split::{amounts_owed, net_balances};

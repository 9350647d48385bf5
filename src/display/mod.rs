//! Display formatting for terminal output

pub mod bill;

pub use bill::{format_amount, format_balances, format_bill_list, format_owed};

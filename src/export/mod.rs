//! Export functionality for gbill
//!
//! Supports exporting the ledger to CSV for spreadsheets or re-import.

pub mod csv;

pub use self::csv::export_bills_csv;

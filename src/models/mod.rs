//! Core data models for gbill

pub mod bill;

pub use bill::{capitalize, normalize_names, validate_amount, Bill, BillValidationError};

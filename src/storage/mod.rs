//! Storage layer for gbill
//!
//! Provides whole-file JSON storage for the ledger plus first-run setup.

pub mod bills;
pub mod file_io;
pub mod init;

pub use bills::BillRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize;

//! Configuration module for gbill
//!
//! This module provides:
//! - Config directory resolution
//! - The settings record that points at the ledger file

pub mod paths;
pub mod settings;

pub use paths::GbillPaths;
pub use settings::Settings;

//! gbill - group bill splitting from the terminal
//!
//! This library provides the core functionality for the gbill ledger: it
//! records shared expenses (amount, payer, participants) in a JSON file and
//! works out how much each person owes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory and the settings record
//! - `error`: Custom error types
//! - `models`: The bill model and name normalization
//! - `storage`: Whole-file JSON storage for the ledger
//! - `services`: Ledger operations and split calculations
//! - `audit`: Append-only log of ledger changes
//! - `display`: Plain-text tables for terminal output
//! - `export`: CSV export
//! - `cli`: Command handlers used by the `gbill` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use gbill::config::{GbillPaths, Settings};
//! use gbill::services::LedgerService;
//!
//! let paths = GbillPaths::new()?;
//! let settings = Settings::load(&paths)?;
//! let ledger = LedgerService::new(&settings);
//! ledger.add(["Ann", "Bo"], "Pat", 90.0)?;
//! let owed = ledger.calculate()?; // Ann -> 30.0, Bo -> 30.0
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{GbillError, GbillResult};

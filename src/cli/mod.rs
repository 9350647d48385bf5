//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod export;
pub mod init;
pub mod log;
pub mod split;

pub use bill::{handle_add, handle_clear, handle_edit, handle_list, handle_remove, AddArgs, EditArgs};
pub use export::handle_export;
pub use init::{handle_config, handle_init};
pub use log::handle_log;
pub use split::{handle_balance, handle_calculate};

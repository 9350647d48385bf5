//! Init and config CLI commands

use std::path::PathBuf;

use crate::config::paths::{default_database_path, GbillPaths};
use crate::config::settings::Settings;
use crate::error::GbillResult;
use crate::storage::{initialize, BillRepository};

/// Handle `gbill init`
pub fn handle_init(paths: &GbillPaths, db_path: Option<PathBuf>) -> GbillResult<()> {
    let db_path = match db_path {
        Some(path) => path,
        None => default_database_path()?,
    };

    let settings = initialize(paths, &db_path)?;
    println!("The gbill database is {}", settings.database.display());

    Ok(())
}

/// Handle `gbill config`
pub fn handle_config(paths: &GbillPaths) -> GbillResult<()> {
    println!("gbill configuration");
    println!("===================");
    println!("Config file: {}", paths.settings_file().display());
    println!("Audit log:   {}", paths.audit_log().display());

    match Settings::load(paths) {
        Ok(settings) => {
            let repo = BillRepository::new(&settings.database);
            let status = if !repo.exists() {
                "missing"
            } else if repo.is_valid() {
                "ok"
            } else {
                "unreadable"
            };
            println!("Database:    {} ({})", settings.database.display(), status);
        }
        Err(_) => println!("Database:    (not initialized, run \"gbill init\")"),
    }

    Ok(())
}

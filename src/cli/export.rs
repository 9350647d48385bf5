//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::error::{GbillError, GbillResult};
use crate::export::export_bills_csv;
use crate::services::LedgerService;

/// Handle `gbill export`; writes to stdout when no output file is given
pub fn handle_export(service: &LedgerService, output: Option<PathBuf>) -> GbillResult<()> {
    let bills = service.list()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                GbillError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            export_bills_csv(&bills, BufWriter::new(file))?;
            eprintln!("Exported {} bill(s) to: {}", bills.len(), path.display());
        }
        None => {
            export_bills_csv(&bills, io::stdout().lock())?;
        }
    }

    Ok(())
}

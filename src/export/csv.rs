//! CSV export of the ledger
//!
//! Writes one row per bill: `id,participants,payer,amount`. Participants are
//! joined with `;` so the file can be fed back into the importer. Amounts
//! are written unrounded and read back to the same value.
//!
//! Names pass through the importer's normalization again on the way back,
//! so a name holding `;` comes back as two participants and a payer such
//! as `Ann, Jr` comes back as `Ann, jr`.

use std::io::Write;

use crate::error::{GbillError, GbillResult};
use crate::models::Bill;

/// Export bills to CSV, numbering them from 1
pub fn export_bills_csv<W: Write>(bills: &[Bill], writer: W) -> GbillResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "participants", "payer", "amount"])
        .map_err(|e| GbillError::Export(e.to_string()))?;

    for (i, bill) in bills.iter().enumerate() {
        csv_writer
            .write_record([
                (i + 1).to_string(),
                bill.participants.join(";"),
                bill.payer.clone(),
                bill.amount.to_string(),
            ])
            .map_err(|e| GbillError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GbillError::Export(e.to_string()))
}

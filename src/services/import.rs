//! CSV import service
//!
//! Parses bills from a CSV file with the header `participants,payer,amount`.
//! The participants cell holds several names separated by `;` (or by commas
//! when the cell is quoted). Names go through the same normalization as
//! bills entered on the command line.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{GbillError, GbillResult};
use crate::models::{capitalize, normalize_names, Bill};

const PARTICIPANTS: &str = "participants";
const PAYER: &str = "payer";
const AMOUNT: &str = "amount";

/// Column positions found in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    participants: usize,
    payer: usize,
    amount: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> GbillResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| GbillError::Import(format!("missing '{}' column", name)))
        };

        Ok(Self {
            participants: find(PARTICIPANTS)?,
            payer: find(PAYER)?,
            amount: find(AMOUNT)?,
        })
    }
}

/// Parse every bill in a CSV document
///
/// Fails on the first bad row, naming its line number; no partial result is
/// returned.
pub fn import_bills_csv<R: Read>(reader: R) -> GbillResult<Vec<Bill>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| GbillError::Import(format!("failed to read header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut bills = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        // Header is line 1
        let line = i + 2;
        let record =
            record.map_err(|e| GbillError::Import(format!("line {}: {}", line, e)))?;
        let bill = parse_record(&record, mapping)
            .map_err(|msg| GbillError::Import(format!("line {}: {}", line, msg)))?;
        bills.push(bill);
    }

    Ok(bills)
}

fn parse_record(record: &StringRecord, mapping: ColumnMapping) -> Result<Bill, String> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .ok_or_else(|| format!("missing {} value", name))
    };

    let participants = field(mapping.participants, PARTICIPANTS)?.replace(';', ",");
    let participants = normalize_names([participants]);
    let payer = capitalize(field(mapping.payer, PAYER)?);
    let raw_amount = field(mapping.amount, AMOUNT)?;
    let amount: f64 = raw_amount
        .trim_start_matches('$')
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw_amount))?;

    let bill = Bill::new(participants, payer, amount);
    bill.validate().map_err(|e| e.to_string())?;
    Ok(bill)
}

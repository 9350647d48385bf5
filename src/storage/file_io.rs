//! File I/O utilities for the ledger file
//!
//! Reads fail with `Read` on I/O problems and `Parse` on malformed JSON.
//! Writes replace the whole file through a temp file and a rename, so a
//! failed write leaves the previous contents in place.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::GbillError;

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, GbillError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| GbillError::read(path, e))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            GbillError::read(path, e)
        } else {
            GbillError::parse(path, e)
        }
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// Output is indented with four spaces.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), GbillError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| GbillError::write(&temp_path, e))?;

    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut serializer)
        .map_err(|e| GbillError::write(path, e))?;

    writer.flush().map_err(|e| GbillError::write(path, e))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| GbillError::write(path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GbillError::write(path, e)
    })?;

    Ok(())
}

//! # CSV Codec
//!
//! Converts between comma-separated text and [`Record`]s.
//!
//! ## Format
//! ```text
//! guest_id,first_name,last_name,check_in_date,check_out_date   ← header
//! G-101,Maria,Lopez,2024-05-28,2024-06-02                      ← one row per record
//! G-102,"Smith, Jr.",John,2024-05-30,2024-06-01                 ← quoting as needed
//! ```
//!
//! - The header row is mandatory; a table with only a header has zero records.
//! - A short row is padded with empty values; a long row is a format error.
//! - Blank lines are skipped.

use std::io::{Read, Write};

use hotel_core::Record;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Byte-order mark some spreadsheet tools put in front of the header.
const BOM: char = '\u{feff}';

/// Parses a table into its header and records.
pub(crate) fn read_table<R: Read>(table: &str, reader: R) -> StoreResult<(Vec<String>, Vec<Record>)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()
        .map_err(|e| csv_error(table, e))?
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                name.trim_start_matches(BOM).to_string()
            } else {
                name.to_string()
            }
        })
        .collect();

    if header.is_empty() || header.iter().all(|name| name.is_empty()) {
        return Err(StoreError::Format {
            table: table.to_string(),
            reason: "no header row".to_string(),
        });
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| csv_error(table, e))?;

        if row.len() > header.len() {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            return Err(StoreError::Format {
                table: table.to_string(),
                reason: format!(
                    "line {} has {} values but the header has {} columns",
                    line,
                    row.len(),
                    header.len()
                ),
            });
        }

        let record = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), row.get(i).unwrap_or("")))
            .collect::<Record>();
        records.push(record);
    }

    debug!(table, columns = header.len(), records = records.len(), "Parsed table");
    Ok((header, records))
}

/// Writes a header row followed by one row per record.
///
/// Every record is checked before the first byte is written: a record
/// holding a field outside `columns` fails the whole write with a Schema
/// error. Fields a record lacks are written as empty values.
pub(crate) fn write_table<W: Write>(
    table: &str,
    writer: W,
    columns: &[String],
    records: &[Record],
) -> StoreResult<()> {
    for record in records {
        if let Some(extra) = record.field_names().find(|f| !columns.iter().any(|c| c == f)) {
            return Err(StoreError::schema(table, extra));
        }
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(columns)
        .map_err(|e| csv_error(table, e))?;

    for record in records {
        csv_writer
            .write_record(columns.iter().map(|c| record.get(c).unwrap_or("")))
            .map_err(|e| csv_error(table, e))?;
    }

    csv_writer
        .flush()
        .map_err(|e| StoreError::io(table, e))?;

    Ok(())
}

/// Splits csv failures into I/O errors and format errors.
fn csv_error(table: &str, err: csv::Error) -> StoreError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StoreError::io(table, source),
        _ => StoreError::Format {
            table: table.to_string(),
            reason,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

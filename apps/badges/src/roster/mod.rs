//! Record source: reads the attendee roster into ordered `AttendeeRecord`s.
//!
//! The roster is delimited text with a header row. `First Name`, `Last Name` and
//! `Organization` are required; any other columns are ignored. Short rows are accepted
//! and their missing cells read as empty strings.

pub mod decode;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::AttendeeRecord;
use crate::roster::decode::decode_input;

pub const REQUIRED_COLUMNS: [&str; 3] = ["First Name", "Last Name", "Organization"];

#[derive(Debug, Error)]
pub enum RecordSourceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown text encoding '{0}'")]
    UnknownEncoding(String),

    #[error("input is not valid {encoding}")]
    Decode { encoding: String },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed row: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads and parses the roster at `path`.
pub fn load_records(
    path: &Path,
    encoding: &str,
    delimiter: u8,
) -> Result<Vec<AttendeeRecord>, RecordSourceError> {
    let bytes = std::fs::read(path).map_err(|source| RecordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let records = parse_records(&bytes, encoding, delimiter)?;
    info!("Loaded {} attendee records from {}", records.len(), path.display());
    Ok(records)
}

/// Decodes and parses roster bytes.
pub fn parse_records(
    bytes: &[u8],
    encoding: &str,
    delimiter: u8,
) -> Result<Vec<AttendeeRecord>, RecordSourceError> {
    let text = decode_input(bytes, encoding)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    let position = |column: &'static str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or(RecordSourceError::MissingColumn(column))
    };
    let columns = [
        position(REQUIRED_COLUMNS[0])?,
        position(REQUIRED_COLUMNS[1])?,
        position(REQUIRED_COLUMNS[2])?,
    ];

    reader
        .records()
        .map(|row| -> Result<AttendeeRecord, RecordSourceError> {
            let row = row?;
            let cell = |idx: usize| row.get(idx).unwrap_or("");
            Ok(AttendeeRecord::new(
                cell(columns[0]),
                cell(columns[1]),
                cell(columns[2]),
            ))
        })
        .collect()
}

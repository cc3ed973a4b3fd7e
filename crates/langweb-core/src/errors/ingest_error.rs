//! Survey table ingestion errors.

use std::path::PathBuf;

/// Errors that can occur while reading and merging survey tables.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV decode error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("{path} has an empty header row")]
    EmptyHeader { path: PathBuf },

    #[error("{path} identity column is '{found}', expected one of {expected:?}")]
    UnrecognizedIdentityHeader {
        path: PathBuf,
        found: String,
        expected: &'static [&'static str],
    },

    #[error("Malformed row {row} in {path}: {found} columns, header has {expected}")]
    MalformedRow {
        path: PathBuf,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Row {row} in {path} has a multi-valued identity cell: {cell:?}")]
    MultiValuedKey {
        path: PathBuf,
        row: usize,
        cell: String,
    },

    #[error("Exchange file {path} could not be decoded: {message}")]
    Exchange { path: PathBuf, message: String },
}

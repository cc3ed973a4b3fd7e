//! Node/link builder and tally errors.

use std::path::PathBuf;

/// Errors that can occur while building the graph or the Sankey tallies.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Record {key:?} has no categories; cannot determine a primary value")]
    EmptyRecord { key: String },

    #[error("Record {key:?} has no unique label cell (count == 1)")]
    NoUniqueLabel { key: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV decode error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("JSON error in {path}: {message}")]
    Json { path: PathBuf, message: String },
}

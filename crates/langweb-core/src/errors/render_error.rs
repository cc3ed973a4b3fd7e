//! Rendering and page-writing errors.

use std::path::PathBuf;

/// Errors that can occur while writing output pages.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

//! Exchange file IO: the merged record list handed to the graph stage.

use std::path::Path;

use tracing::info;

use langweb_core::errors::IngestError;
use langweb_core::types::Record;

/// Write the merged records as pretty-printed JSON, creating parent
/// directories as needed. Overwrites any previous file in full.
pub fn write_exchange(path: &Path, records: &[Record]) -> Result<(), IngestError> {
    let json = serde_json::to_string_pretty(records).map_err(|e| IngestError::Exchange {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| IngestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, json.as_bytes()).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "wrote exchange file");
    Ok(())
}

/// Read the exchange file back. Decode failures are fatal.
pub fn read_exchange(path: &Path) -> Result<Vec<Record>, IngestError> {
    let raw = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|e| IngestError::Exchange {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

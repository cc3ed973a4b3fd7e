//! Node/link exchange file IO: `nodes_links.json`.

use std::path::Path;

use tracing::info;

use langweb_core::errors::GraphError;
use langweb_core::types::NetworkData;

/// Write the graph as pretty-printed JSON, creating parent directories as
/// needed. Overwrites any previous file in full.
pub fn write_network_data(path: &Path, data: &NetworkData) -> Result<(), GraphError> {
    let json = serde_json::to_string_pretty(data).map_err(|e| GraphError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| GraphError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, json.as_bytes()).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        nodes = data.nodes.len(),
        links = data.links.len(),
        "wrote network data"
    );
    Ok(())
}

/// Read the graph back for the renderers. Decode failures are fatal.
pub fn read_network_data(path: &Path) -> Result<NetworkData, GraphError> {
    let raw = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|e| GraphError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use langweb_core::types::{Category, Link, Node};

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("json/nodes_links.json");

        let data = NetworkData {
            nodes: vec![Node {
                id: "Dutch".into(),
                category: Category::Language,
                color: Category::Language.color().into(),
            }],
            links: vec![Link {
                interview: "languages".into(),
                source: "partner".into(),
                target: "Dutch".into(),
            }],
        };

        write_network_data(&path, &data).unwrap();
        assert_eq!(read_network_data(&path).unwrap(), data);
    }

    #[test]
    fn test_decode_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes_links.json");
        std::fs::write(&path, b"[]").unwrap();
        let err = read_network_data(&path).unwrap_err();
        assert!(matches!(err, GraphError::Json { .. }));
    }
}

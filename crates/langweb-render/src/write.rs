//! Page persistence.

use std::path::Path;

use tracing::info;
use xxhash_rust::xxh3::xxh3_64;

use langweb_core::errors::RenderError;

/// Write a rendered page, creating parent directories as needed. The content
/// hash is logged so reruns can be checked for byte-identical output.
pub fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, html.as_bytes()).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let hash = format!("{:016x}", xxh3_64(html.as_bytes()));
    info!(path = %path.display(), bytes = html.len(), hash = %hash, "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site/network.html");
        write_page(&path, "<!doctype html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!doctype html>");
    }

    #[test]
    fn test_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        write_page(&path, "a much longer first version").unwrap();
        write_page(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }
}

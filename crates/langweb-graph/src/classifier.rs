//! Node classification against the raw reference lists.

use std::path::Path;

use tracing::debug;

use langweb_core::constants::IDENTITY_HEADERS;
use langweb_core::errors::GraphError;
use langweb_core::types::collections::FxHashSet;
use langweb_core::types::Category;

use crate::normalize::normalize_id;

/// Classifies node ids by membership in the four reference lists, in fixed
/// priority order: interlocutor, media, place, situation. Ids found in no
/// list are languages.
#[derive(Debug, Default)]
pub struct Classifier {
    // Indexed parallel to Category::CLASSIFIED.
    lists: [FxHashSet<String>; 4],
}

impl Classifier {
    /// Build a classifier from the four raw reference CSVs. Each list is the
    /// file's first column, header row excluded, normalized the same way
    /// node ids are.
    pub fn from_files(
        interlocutors: &Path,
        media: &Path,
        places: &Path,
        situations: &Path,
        delimiter: u8,
    ) -> Result<Self, GraphError> {
        let lists = [
            read_reference_list(interlocutors, delimiter)?,
            read_reference_list(media, delimiter)?,
            read_reference_list(places, delimiter)?,
            read_reference_list(situations, delimiter)?,
        ];
        Ok(Self { lists })
    }

    /// Build from in-memory lists, in priority order
    /// (interlocutors, media, places, situations).
    pub fn from_lists(lists: [Vec<String>; 4]) -> Self {
        Self {
            lists: lists.map(|list| list.iter().map(|id| normalize_id(id)).collect()),
        }
    }

    /// Classify one node id. Total: every id gets exactly one category, and
    /// an id present in several lists takes the earliest-priority one.
    pub fn classify(&self, id: &str) -> Category {
        for (category, list) in Category::CLASSIFIED.iter().zip(&self.lists) {
            if list.contains(id) {
                return *category;
            }
        }
        Category::Language
    }
}

/// Read the first column of a reference CSV, skipping the header row.
fn read_reference_list(path: &Path, delimiter: u8) -> Result<FxHashSet<String>, GraphError> {
    let raw = std::fs::read(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = raw.strip_prefix(b"\xef\xbb\xbf".as_slice()).unwrap_or(&raw);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(raw);

    let mut list = FxHashSet::default();
    for row in reader.records() {
        let row = row.map_err(|e| GraphError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let Some(first) = row.get(0) else { continue };
        let first = first.trim();
        // The header row names the identity column, not an entity.
        if IDENTITY_HEADERS.contains(&first) {
            continue;
        }
        let id = normalize_id(first);
        if !id.is_empty() {
            list.insert(id);
        }
    }

    debug!(path = %path.display(), entries = list.len(), "read reference list");
    Ok(list)
}

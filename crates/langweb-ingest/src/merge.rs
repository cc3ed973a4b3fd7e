//! Merging survey tables into one record set.

use tracing::{debug, info};

use langweb_core::types::collections::FxHashMap;
use langweb_core::types::Record;

use crate::table::SurveyTable;

/// Merge tables into a single record list, last-writer-wins per key.
///
/// A later table's record for a key replaces the earlier record entirely;
/// fields are not combined across tables. Output keeps first-seen key order,
/// so merging the same tables twice produces the same record sequence.
pub fn merge(tables: &[SurveyTable]) -> Vec<Record> {
    let mut merged: Vec<Record> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut overwrites = 0usize;

    for table in tables {
        for record in &table.records {
            match index.get(&record.key) {
                Some(&slot) => {
                    merged[slot] = record.clone();
                    overwrites += 1;
                }
                None => {
                    index.insert(record.key.clone(), merged.len());
                    merged.push(record.clone());
                }
            }
        }
        debug!(
            path = %table.path.display(),
            records = table.records.len(),
            "merged survey table"
        );
    }

    info!(
        tables = tables.len(),
        records = merged.len(),
        overwrites,
        "merge complete"
    );
    merged
}

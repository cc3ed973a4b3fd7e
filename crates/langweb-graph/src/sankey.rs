//! Per-table co-occurrence tallies for the Sankey diagrams.

use tracing::info;

use langweb_core::errors::GraphError;
use langweb_core::types::{Record, SankeyData};

use crate::normalize::{normalize, normalize_id};

/// Tally language co-occurrence for one survey table.
///
/// Per record, all cell components (the identity cell included) are counted
/// in row order. The record's own label is the first component counted
/// exactly once; every other component flows into that label with its count
/// as the weight. A row with no unique component is fatal: the label cannot
/// be told apart from the languages.
pub fn cooccurrence(records: &[Record]) -> Result<SankeyData, GraphError> {
    let mut data = SankeyData::default();

    for record in records {
        let counts = count_components(record);

        let target = counts
            .iter()
            .find(|(_, n)| *n == 1)
            .map(|(component, _)| component.clone())
            .ok_or_else(|| GraphError::NoUniqueLabel {
                key: record.key.clone(),
            })?;

        for (component, n) in counts {
            if component != target {
                data.push(component, target.clone(), n);
            }
        }
    }

    info!(records = records.len(), flows = data.source.len(), "tallied co-occurrence");
    Ok(data)
}

/// Count normalized components of a record, preserving first-appearance order.
fn count_components(record: &Record) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut bump = |component: String| {
        match counts.iter_mut().find(|(c, _)| *c == component) {
            Some((_, n)) => *n += 1,
            None => counts.push((component, 1)),
        }
    };

    let key = normalize_id(&record.key);
    if !key.is_empty() {
        bump(key);
    }
    for field in &record.fields {
        for part in normalize(&field.value) {
            bump(part);
        }
    }
    counts
}

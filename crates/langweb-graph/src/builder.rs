//! The node/link builder: merged records in, typed graph out.

use tracing::{info, warn};

use langweb_core::errors::GraphError;
use langweb_core::types::collections::FxHashSet;
use langweb_core::types::{Link, NetworkData, Node, Record};

use crate::classifier::Classifier;
use crate::normalize::{normalize, normalize_id};

/// Builds the deduplicated node set and the link list from merged records.
pub struct NetworkBuilder<'a> {
    classifier: &'a Classifier,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(classifier: &'a Classifier) -> Self {
        Self { classifier }
    }

    /// Build the graph.
    ///
    /// Per record, the first field is the primary slot: its normalized
    /// components are the source endpoints for every link the record
    /// produces, and the slot itself is never a target. Every other field
    /// contributes one link per (primary component, value component) pair,
    /// labeled with that field's category. A record with no fields at all is
    /// fatal: there is no primary slot to key its links on.
    ///
    /// Node ids are the union of record keys and all value components.
    /// Nodes are emitted sorted by id so reruns are byte-identical; links
    /// keep record order and are not deduplicated.
    pub fn build(&self, records: &[Record]) -> Result<NetworkData, GraphError> {
        let mut ids: FxHashSet<String> = FxHashSet::default();
        let mut links: Vec<Link> = Vec::new();

        for record in records {
            let primary_field = record.fields.first().ok_or_else(|| GraphError::EmptyRecord {
                key: record.key.clone(),
            })?;
            let primaries = normalize(&primary_field.value);
            if primaries.is_empty() {
                warn!(key = %record.key, "record has an empty primary value; no links emitted");
            }

            let key = normalize_id(&record.key);
            if !key.is_empty() {
                ids.insert(key);
            }

            for (position, field) in record.fields.iter().enumerate() {
                for part in normalize(&field.value) {
                    if position > 0 {
                        for primary in &primaries {
                            links.push(Link {
                                interview: field.category.clone(),
                                source: primary.clone(),
                                target: part.clone(),
                            });
                        }
                    }
                    ids.insert(part);
                }
            }
        }

        let mut sorted: Vec<String> = ids.into_iter().collect();
        sorted.sort();

        let nodes: Vec<Node> = sorted
            .into_iter()
            .map(|id| {
                let category = self.classifier.classify(&id);
                Node {
                    color: category.color().to_string(),
                    id,
                    category,
                }
            })
            .collect();

        info!(
            records = records.len(),
            nodes = nodes.len(),
            links = links.len(),
            "built node/link graph"
        );

        Ok(NetworkData { nodes, links })
    }
}

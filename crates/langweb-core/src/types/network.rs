//! Node/link exchange types handed from the graph stage to the renderers.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A unique participant or value appearing anywhere across the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub color: String,
}

/// A directed, labeled edge between two node ids.
///
/// `interview` carries the category label of the slot the target came from.
/// The name is inherited from the exchange format and kept for downstream
/// compatibility; see DESIGN.md for the open naming question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub interview: String,
    pub source: String,
    pub target: String,
}

/// The node/link exchange document: `nodes_links.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// Per-table co-occurrence flows for one Sankey diagram, as parallel arrays.
///
/// `source[i]` flows into `target[i]` with weight `value[i]`. Sources are
/// cell values (languages), targets are row labels (interlocutors, places,
/// situations, media). Entries keep row order; no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyData {
    pub source: Vec<String>,
    pub target: Vec<String>,
    pub value: Vec<u64>,
}

impl SankeyData {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn push(&mut self, source: impl Into<String>, target: impl Into<String>, value: u64) {
        self.source.push(source.into());
        self.target.push(target.into());
        self.value.push(value);
    }

    /// Unique labels across sources and targets, in first-appearance order
    /// (sources first, matching the chart's label indexing).
    pub fn labels(&self) -> Vec<String> {
        let mut seen = crate::types::collections::FxHashSet::default();
        let mut labels = Vec::new();
        for label in self.source.iter().chain(self.target.iter()) {
            if seen.insert(label.as_str()) {
                labels.push(label.clone());
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_serializes_type_field() {
        let node = Node {
            id: "partner".into(),
            category: Category::Interlocutor,
            color: Category::Interlocutor.color().into(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "interlocutor");
        assert_eq!(json["color"], "#ffc107");
    }

    #[test]
    fn test_sankey_labels_deduplicate_in_order() {
        let mut data = SankeyData::default();
        data.push("Dutch", "partner", 2);
        data.push("Turkish", "partner", 1);
        data.push("Dutch", "mother", 3);
        assert_eq!(data.labels(), vec!["Dutch", "Turkish", "partner", "mother"]);
    }
}

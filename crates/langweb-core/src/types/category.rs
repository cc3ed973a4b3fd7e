//! Node categories and the centralized priority/color table.

use serde::{Deserialize, Serialize};

/// Classification bucket for a node.
///
/// Variant order is the classification priority: a node id present in more
/// than one reference list takes the earliest matching category. `Language`
/// is the default for ids found in no list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Interlocutor,
    Media,
    Place,
    Situation,
    Language,
}

impl Category {
    /// Categories backed by a reference list, in classification priority order.
    pub const CLASSIFIED: [Category; 4] = [
        Category::Interlocutor,
        Category::Media,
        Category::Place,
        Category::Situation,
    ];

    /// Serialized label, matching the exchange format's `type` field.
    pub fn label(self) -> &'static str {
        match self {
            Category::Interlocutor => "interlocutor",
            Category::Media => "media",
            Category::Place => "place",
            Category::Situation => "situation",
            Category::Language => "language",
        }
    }

    /// Display color for network nodes of this category.
    pub fn color(self) -> &'static str {
        match self {
            Category::Interlocutor => "#ffc107",
            Category::Media => "#6a040f",
            Category::Place => "#118ab2",
            Category::Situation => "#dc3545",
            Category::Language => "#fd7e14",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Category::Interlocutor < Category::Media);
        assert!(Category::Media < Category::Place);
        assert!(Category::Place < Category::Situation);
        assert!(Category::Situation < Category::Language);
    }

    #[test]
    fn test_serialized_labels() {
        let json = serde_json::to_string(&Category::Interlocutor).unwrap();
        assert_eq!(json, "\"interlocutor\"");
        for cat in Category::CLASSIFIED {
            assert_eq!(serde_json::to_string(&cat).unwrap(), format!("\"{}\"", cat.label()));
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        let all = [
            Category::Interlocutor,
            Category::Media,
            Category::Place,
            Category::Situation,
            Category::Language,
        ];
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(a.color(), b.color());
                }
            }
        }
    }
}

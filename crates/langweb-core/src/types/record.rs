//! Survey records: one informant/interlocutor's answers.

use serde::{Deserialize, Serialize};

/// One answered survey slot: the column header and the raw cell value.
///
/// The raw value may encode multiple entries separated by commas
/// ("Dutch, Turkish"); splitting happens in the graph stage, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub category: String,
    pub value: String,
}

impl Field {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

/// One informant/interlocutor's survey answers.
///
/// Fields are an ordered list, in source-column order. The first field is
/// the record's primary slot: the link builder uses its value as the source
/// endpoint for every link the record produces. Carrying the order
/// structurally (instead of relying on map iteration order) is what makes
/// "primary = first listed" a guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identity of the informant/interlocutor, from the table's first column.
    pub key: String,
    /// Remaining columns, in order.
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// The primary slot, if the record has any fields at all.
    pub fn primary(&self) -> Option<&Field> {
        self.fields.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_first_field() {
        let mut record = Record::new("partner");
        record.fields.push(Field::new("language", "Dutch, Turkish"));
        record.fields.push(Field::new("frequency", "daily"));
        assert_eq!(record.primary().unwrap().category, "language");
    }

    #[test]
    fn test_field_order_survives_json_round_trip() {
        let mut record = Record::new("partner");
        for i in 0..8 {
            record.fields.push(Field::new(format!("cat{i}"), "x"));
        }
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

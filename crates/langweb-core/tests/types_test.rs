//! Tests for the shared data model.

use langweb_core::types::{Category, Field, Link, NetworkData, Node, Record};

#[test]
fn test_network_data_json_shape() {
    let data = NetworkData {
        nodes: vec![Node {
            id: "Dutch".into(),
            category: Category::Language,
            color: Category::Language.color().into(),
        }],
        links: vec![Link {
            interview: "languages used with partner".into(),
            source: "partner".into(),
            target: "Dutch".into(),
        }],
    };

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["nodes"][0]["id"], "Dutch");
    assert_eq!(json["nodes"][0]["type"], "language");
    assert_eq!(json["nodes"][0]["color"], "#fd7e14");
    assert_eq!(json["links"][0]["source"], "partner");
    assert_eq!(json["links"][0]["target"], "Dutch");
}

#[test]
fn test_network_data_round_trip() {
    let data = NetworkData {
        nodes: vec![Node {
            id: "at the bank".into(),
            category: Category::Place,
            color: Category::Place.color().into(),
        }],
        links: vec![],
    };
    let json = serde_json::to_string_pretty(&data).unwrap();
    let back: NetworkData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_record_primary_none_when_empty() {
    let record = Record::new("partner");
    assert!(record.primary().is_none());
}

#[test]
fn test_record_exchange_list_round_trip() {
    let records = vec![
        Record {
            key: "partner".into(),
            fields: vec![
                Field::new("languages", "Dutch, Turkish"),
                Field::new("frequency", "daily"),
            ],
        },
        Record {
            key: "at the bank".into(),
            fields: vec![Field::new("languages", "Dutch")],
        },
    ];
    let json = serde_json::to_string(&records).unwrap();
    let back: Vec<Record> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, records);
    assert_eq!(back[0].primary().unwrap().value, "Dutch, Turkish");
}

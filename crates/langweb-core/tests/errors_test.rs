//! Tests for the langweb error handling system.

use std::path::PathBuf;

use langweb_core::errors::*;

#[test]
fn test_from_conversions() {
    let ingest = IngestError::EmptyHeader {
        path: PathBuf::from("media.csv"),
    };
    let pipeline: PipelineError = ingest.into();
    assert!(matches!(pipeline, PipelineError::Ingest(_)));

    let graph = GraphError::EmptyRecord {
        key: "partner".into(),
    };
    let pipeline: PipelineError = graph.into();
    assert!(matches!(pipeline, PipelineError::Graph(_)));

    let config = ConfigError::FileNotFound {
        path: PathBuf::from("langweb.toml"),
    };
    let pipeline: PipelineError = config.into();
    assert!(matches!(pipeline, PipelineError::Config(_)));

    let render = RenderError::Io {
        path: PathBuf::from("network.html"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let pipeline: PipelineError = render.into();
    assert!(matches!(pipeline, PipelineError::Render(_)));
}

#[test]
fn test_messages_name_the_offending_file() {
    let err = IngestError::MalformedRow {
        path: PathBuf::from("data/csv/places.csv"),
        row: 7,
        found: 3,
        expected: 5,
    };
    let msg = err.to_string();
    assert!(msg.contains("places.csv"));
    assert!(msg.contains("row 7"));
    assert!(msg.contains("3 columns"));
}

#[test]
fn test_transparent_display_through_pipeline_error() {
    let graph = GraphError::NoUniqueLabel {
        key: "music".into(),
    };
    let expected = graph.to_string();
    let pipeline: PipelineError = graph.into();
    assert_eq!(pipeline.to_string(), expected);
}

//! langweb-core: shared foundations for the langweb pipeline
//!
//! This crate provides everything the pipeline stages have in common:
//! - Types: records, categories, node/link exchange structures
//! - Errors: per-subsystem error enums and the top-level `PipelineError`
//! - Config: `langweb.toml` loading with defaults
//! - Tracing: `LANGWEB_LOG`-driven log setup
//! - Constants: delimiters, headers, default file locations

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::LangwebConfig;
pub use errors::{ConfigError, GraphError, IngestError, PipelineError, RenderError};
pub use types::{Category, Field, Link, NetworkData, Node, Record, SankeyData};

//! Top-level pipeline error aggregating every subsystem error.

use super::config_error::ConfigError;
use super::graph_error::GraphError;
use super::ingest_error::IngestError;
use super::render_error::RenderError;

/// Any error a pipeline stage can surface. All are fatal; stages are
/// re-run manually after the source data is fixed.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

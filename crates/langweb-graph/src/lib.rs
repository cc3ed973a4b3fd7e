//! langweb-graph: node/link construction
//!
//! The analytical core of the pipeline:
//! - Normalize: comma-splitting and whitespace collapsing for cell values
//! - Builder: deduplicated node set + provenance-labeled link list
//! - Classifier: priority-ordered category assignment from reference lists
//! - Sankey: per-table language co-occurrence tallies
//! - IO: the `nodes_links.json` exchange file

pub mod builder;
pub mod classifier;
pub mod io;
pub mod normalize;
pub mod sankey;

pub use builder::NetworkBuilder;
pub use classifier::Classifier;
pub use io::{read_network_data, write_network_data};
pub use normalize::{normalize, normalize_id};
pub use sankey::cooccurrence;

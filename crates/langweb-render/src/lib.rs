//! langweb-render: static HTML output
//!
//! Turns the graph stage's data into the two published pages:
//! - Network: vis-network diagram, graph assembled through petgraph
//! - Sankey: one Plotly figure per survey category
//! - Shell: the shared Bootstrap page frame
//! All layout and chart geometry happen in the browser; this crate only
//! produces the markup and the embedded figure specs.

pub mod network;
pub mod palette;
pub mod sankey;
pub mod shell;
pub mod write;

pub use network::network_html;
pub use sankey::{sankey_html, SankeyDiagram};
pub use shell::escape_html;
pub use write::write_page;

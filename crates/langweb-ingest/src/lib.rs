//! langweb-ingest: survey table ingestion
//!
//! Reads `;`-delimited survey CSVs into ordered [`Record`]s, merges the four
//! tables with last-writer-wins semantics, and round-trips the merged record
//! list through the JSON exchange file handed to the graph stage.
//!
//! [`Record`]: langweb_core::types::Record

pub mod exchange;
pub mod merge;
pub mod table;

pub use exchange::{read_exchange, write_exchange};
pub use merge::merge;
pub use table::{read_table, SurveyTable};

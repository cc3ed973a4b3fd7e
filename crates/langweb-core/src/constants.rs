//! Shared constants for the langweb pipeline.

/// langweb version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default CSV column delimiter for survey tables.
pub const DEFAULT_CSV_DELIMITER: u8 = b';';

/// Separator for multi-valued cells ("Dutch, Turkish").
pub const VALUE_SEPARATOR: char = ',';

/// Header names accepted for the identity column of a survey table.
pub const IDENTITY_HEADERS: [&str; 2] = ["informant", "interlocutor"];

/// Environment variable controlling log filtering.
pub const LOG_ENV_VAR: &str = "LANGWEB_LOG";

/// Fallback log filter when `LANGWEB_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "langweb=info";

/// Default exchange file for merged records.
pub const DEFAULT_EXCHANGE_FILE: &str = "data/json/all_informants_interlocutors.json";

/// Default output file for the node/link graph.
pub const DEFAULT_NETWORK_DATA_FILE: &str = "data/json/nodes_links.json";

/// Default output page for the network diagram.
pub const DEFAULT_NETWORK_PAGE: &str = "network.html";

/// Default output page for the Sankey diagrams.
pub const DEFAULT_SANKEY_PAGE: &str = "sankey.html";

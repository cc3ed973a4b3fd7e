//! Pipeline configuration loaded from an optional `langweb.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Input file locations: the four survey tables plus the four raw reference
/// tables used for node classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub media: PathBuf,
    pub places: PathBuf,
    pub situations: PathBuf,
    pub interlocutors: PathBuf,
    pub raw_media: PathBuf,
    pub raw_places: PathBuf,
    pub raw_situations: PathBuf,
    pub raw_interlocutors: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            media: "data/csv/media.csv".into(),
            places: "data/csv/places.csv".into(),
            situations: "data/csv/situations.csv".into(),
            interlocutors: "data/csv/interlocutors.csv".into(),
            raw_media: "data/csv/raw_data/media.csv".into(),
            raw_places: "data/csv/raw_data/places.csv".into(),
            raw_situations: "data/csv/raw_data/situations.csv".into(),
            raw_interlocutors: "data/csv/raw_data/interlocutors.csv".into(),
        }
    }
}

impl InputConfig {
    /// Survey tables in merge order. Later tables overwrite earlier records
    /// for the same key, so the interlocutors table wins.
    pub fn survey_tables(&self) -> [&Path; 4] {
        [
            &self.media,
            &self.places,
            &self.situations,
            &self.interlocutors,
        ]
    }
}

/// Output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub exchange: PathBuf,
    pub network_data: PathBuf,
    pub network_page: PathBuf,
    pub sankey_page: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            exchange: constants::DEFAULT_EXCHANGE_FILE.into(),
            network_data: constants::DEFAULT_NETWORK_DATA_FILE.into(),
            network_page: constants::DEFAULT_NETWORK_PAGE.into(),
            sankey_page: constants::DEFAULT_SANKEY_PAGE.into(),
        }
    }
}

/// Configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LangwebConfig {
    pub inputs: InputConfig,
    pub outputs: OutputConfig,
    /// CSV column delimiter. Default: ";".
    pub csv_delimiter: Option<String>,
}

impl LangwebConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        let config: LangwebConfig = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from an explicit path, or fall back to defaults when none is
    /// given and no `langweb.toml` exists in the working directory.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let fallback = Path::new("langweb.toml");
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the effective CSV delimiter byte, defaulting to `;`.
    pub fn effective_csv_delimiter(&self) -> u8 {
        self.csv_delimiter
            .as_deref()
            .and_then(|s| s.as_bytes().first().copied())
            .unwrap_or(constants::DEFAULT_CSV_DELIMITER)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(delim) = self.csv_delimiter.as_deref() {
            if delim.len() != 1 || !delim.is_ascii() {
                return Err(ConfigError::InvalidValue {
                    field: "csv_delimiter".into(),
                    message: format!("expected a single ASCII character, got {delim:?}"),
                });
            }
        }
        Ok(())
    }
}

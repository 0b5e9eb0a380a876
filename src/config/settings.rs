use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::DataSource;
use crate::error::AppResult;
use crate::view::Variant;

const DEFAULT_DATA_SOURCE: &str = "data.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub highlights_source: Option<String>,
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

impl Settings {
    /// Resolves the profile document source, letting `requested` win.
    pub fn data_source(&self, requested: Option<&str>) -> AppResult<DataSource> {
        let raw = requested
            .or(self.data_source.as_deref())
            .unwrap_or(DEFAULT_DATA_SOURCE);
        DataSource::parse(raw)
    }

    /// The highlights overlay is optional; `None` skips it entirely.
    pub fn highlights_source(&self, requested: Option<&str>) -> AppResult<Option<DataSource>> {
        requested
            .or(self.highlights_source.as_deref())
            .map(DataSource::parse)
            .transpose()
    }

    pub fn variant(&self, requested: Option<Variant>) -> Variant {
        requested.or(self.variant).unwrap_or_default()
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

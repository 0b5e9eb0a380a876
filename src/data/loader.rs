use std::fmt;
use std::path::PathBuf;

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, AppResult};

/// Where a JSON document comes from: an `http(s)` URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(Url),
    File(PathBuf),
}

impl DataSource {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "data source must not be empty".to_string(),
            ));
        }

        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            return Ok(Self::Remote(Url::parse(trimmed)?));
        }

        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Loader {
    http: Client,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Loads a document, logging and swallowing any failure.
    ///
    /// Callers treat `None` as "render nothing".
    pub async fn load<T: DeserializeOwned>(&self, source: &DataSource) -> Option<T> {
        match self.fetch(source).await {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::error!(source = %source, error = %err, "failed to load document");
                None
            }
        }
    }

    pub async fn fetch<T: DeserializeOwned>(&self, source: &DataSource) -> AppResult<T> {
        let raw = match source {
            DataSource::Remote(url) => self.fetch_remote(url).await?,
            DataSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|err| {
                AppError::Load(format!("failed to read {}: {err}", path.display()))
            })?,
        };

        tracing::debug!(source = %source, bytes = raw.len(), "document fetched");
        Ok(serde_json::from_str(&raw)?)
    }

    async fn fetch_remote(&self, url: &Url) -> AppResult<String> {
        let response = self
            .http
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Load(format!("failed to load {url}: {status}")));
        }

        Ok(response.text().await?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remote_sources() {
        let source = DataSource::parse("https://example.com/data.json").expect("source parses");
        assert!(matches!(source, DataSource::Remote(url) if url.path() == "/data.json"));
    }

    #[test]
    fn treats_relative_paths_as_files() {
        let source = DataSource::parse("./data.json").expect("source parses");
        assert_eq!(source, DataSource::File(PathBuf::from("./data.json")));
    }

    #[test]
    fn rejects_blank_source() {
        assert!(DataSource::parse("   ").is_err());
    }
}

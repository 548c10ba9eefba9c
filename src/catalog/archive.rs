/// NASA Exoplanet Archive access
///
/// The explorer only depends on the [`CatalogSource`] trait: a request with a
/// column list and a predicate goes in, rows come out. [`NasaExoplanetArchive`]
/// implements it against the archive's TAP synchronous endpoint, asking for
/// JSON output (an array of objects keyed by column name).
use std::time::Duration;
use url::Url;

use super::filters::CatalogRequest;
use super::record::ArchiveRow;
use crate::error::{QueryError, QueryResult};
use crate::utils::config::{ArchiveConfig, ARCHIVE_CONFIG};

/// Source of catalog rows
pub trait CatalogSource {
    /// Run a single read-only request
    ///
    /// # Returns
    /// Matching rows (possibly none), or `QueryError` if the source could not
    /// be reached or answered with something that is not a row set
    fn fetch(&self, request: &CatalogRequest) -> QueryResult<Vec<ArchiveRow>>;

    /// Get source name
    fn name(&self) -> String;
}

/// TAP client for the NASA Exoplanet Archive
pub struct NasaExoplanetArchive {
    config: ArchiveConfig,
    agent: ureq::Agent,
}

impl NasaExoplanetArchive {
    pub fn new(config: ArchiveConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        NasaExoplanetArchive { config, agent }
    }

    /// Client configured from the environment (see [`ARCHIVE_CONFIG`])
    pub fn from_env() -> Self {
        Self::new(ARCHIVE_CONFIG.clone())
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Full request URL with the ADQL statement encoded in the query string
    pub fn request_url(&self, request: &CatalogRequest) -> QueryResult<Url> {
        let adql = request.to_adql();
        let url = Url::parse_with_params(
            &self.config.base_url,
            &[("query", adql.as_str()), ("format", "json")],
        )?;
        Ok(url)
    }
}

impl Default for NasaExoplanetArchive {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CatalogSource for NasaExoplanetArchive {
    fn fetch(&self, request: &CatalogRequest) -> QueryResult<Vec<ArchiveRow>> {
        let url = self.request_url(request)?;
        log::debug!("Archive query: {}", request.to_adql());
        log::debug!("Archive URL: {url}");

        let mut response = self.agent.get(url.as_str()).call()?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(QueryError::Status(status));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| QueryError::Transport(format!("Failed to read archive response: {e}")))?;

        parse_archive_json(&body)
    }

    fn name(&self) -> String {
        format!("NasaExoplanetArchive({})", self.config.base_url)
    }
}

/// Decode a TAP JSON response body into rows
pub fn parse_archive_json(body: &str) -> QueryResult<Vec<ArchiveRow>> {
    let trimmed = body.trim_start();
    if !trimmed.starts_with('[') {
        // TAP errors come back as VOTable XML or plain text
        let preview: String = trimmed.chars().take(200).collect();
        return Err(QueryError::Malformed(format!(
            "expected a JSON array of rows, got: {preview}"
        )));
    }
    Ok(serde_json::from_str(trimmed)?)
}

//! Google Books catalog client.
//!
//! Used only by the presentation layer to find books to add; the library
//! store never calls it. Every failure (transport, timeout, HTTP status,
//! undecodable body) surfaces as a catalog-kind [`ReadifyError`].

mod types;

pub use types::CatalogVolume;
use types::{VolumeItem, VolumesResponse};

use crate::config::{AppConfig, CatalogConfig};
use crate::error::{ReadifyError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the remote book catalog.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CatalogClient {
    /// Client for the public endpoint, picking up an API key from
    /// `GOOGLE_BOOKS_API_KEY` when set.
    pub fn new() -> Result<Self> {
        let api_key = std::env::var(CatalogConfig::API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::with_options(
            CatalogConfig::VOLUMES_URL,
            api_key,
            CatalogConfig::REQUEST_TIMEOUT,
        )
    }

    /// Client with an explicit endpoint, key and request timeout.
    pub fn with_options(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(AppConfig::USER_AGENT)
            .build()
            .map_err(|e| ReadifyError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            timeout,
        })
    }

    /// Point the client at another volumes endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Free-text search. `max_results` is clamped to what the API accepts.
    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<CatalogVolume>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ReadifyError::Validation {
                field: "query".to_string(),
                message: "Please enter a title, author, or ISBN to search!".to_string(),
            });
        }

        let url = self.search_url(query, max_results);
        let response: VolumesResponse = self.get_json(&url).await?;
        let volumes = response.into_volumes();
        info!("Catalog search '{}' returned {} volumes", query, volumes.len());
        Ok(volumes)
    }

    /// Look up a single volume by catalog id.
    pub async fn get_volume(&self, volume_id: &str) -> Result<CatalogVolume> {
        let volume_id = volume_id.trim();
        if volume_id.is_empty() {
            return Err(ReadifyError::Validation {
                field: "id".to_string(),
                message: "Please enter a volume ID!".to_string(),
            });
        }

        let url = self.volume_url(volume_id);
        let item: VolumeItem = self.get_json(&url).await?;
        item.into_volume().ok_or_else(|| ReadifyError::InvalidResponse {
            message: format!("volume {} has no id", volume_id),
        })
    }

    fn search_url(&self, query: &str, max_results: u32) -> String {
        let max_results = max_results.clamp(1, CatalogConfig::MAX_RESULTS_LIMIT);
        let mut url = format!(
            "{}?q={}&maxResults={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );
        if let Some(key) = &self.api_key {
            url.push_str(&format!("&key={}", urlencoding::encode(key)));
        }
        url
    }

    fn volume_url(&self, volume_id: &str) -> String {
        let mut url = format!("{}/{}", self.base_url, urlencoding::encode(volume_id));
        if let Some(key) = &self.api_key {
            url.push_str(&format!("?key={}", urlencoding::encode(key)));
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("Catalog GET {}", self.redact(url));

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ReadifyError::from_request(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadifyError::Network {
                message: format!("catalog returned {}", status),
                status_code: Some(status.as_u16()),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ReadifyError::Timeout(self.timeout)
            } else {
                ReadifyError::InvalidResponse {
                    message: format!("Failed to parse catalog response: {}", e),
                }
            }
        })
    }

    fn redact(&self, url: &str) -> String {
        match &self.api_key {
            Some(key) => url.replace(&*urlencoding::encode(key), "<redacted>"),
            None => url.to_string(),
        }
    }
}

//! HTTP client for the artwork catalog
//!
//! Issues `GET <base_url>?page=<n>&limit=<size>` and decodes the
//! `{ data, pagination }` body.

use crate::config::TableConfig;
use crate::error::{Error, Result};
use crate::source::PageSource;
use crate::types::{Page, ARTWORK_FIELDS};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the catalog client
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Catalog endpoint
    pub base_url: String,
    /// Rows per page
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Fields listed in the `fields` query parameter, if any
    pub fields: Option<Vec<String>>,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self::from(&TableConfig::default())
    }
}

impl From<&TableConfig> for CatalogClientConfig {
    fn from(config: &TableConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            page_size: config.page_size,
            timeout: config.timeout(),
            default_headers: HashMap::new(),
            user_agent: config.user_agent.clone(),
            fields: config
                .request_fields
                .then(|| ARTWORK_FIELDS.iter().map(ToString::to_string).collect()),
        }
    }
}

impl CatalogClientConfig {
    /// Create a new config builder
    pub fn builder() -> CatalogClientConfigBuilder {
        CatalogClientConfigBuilder::default()
    }

    /// Config pointing at `base_url` with defaults otherwise
    pub fn for_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Builder for catalog client config
#[derive(Default)]
pub struct CatalogClientConfigBuilder {
    config: CatalogClientConfig,
}

impl CatalogClientConfigBuilder {
    /// Set the catalog endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set rows per page
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Do not send a `fields` parameter
    pub fn all_fields(mut self) -> Self {
        self.config.fields = None;
        self
    }

    /// Build the config
    pub fn build(self) -> CatalogClientConfig {
        self.config
    }
}

/// HTTP page source for the artwork catalog
pub struct CatalogClient {
    client: Client,
    config: CatalogClientConfig,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(CatalogClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: CatalogClientConfig) -> Result<Self> {
        if config.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Create a client from table configuration
    pub fn from_table_config(config: &TableConfig) -> Result<Self> {
        Self::with_config(CatalogClientConfig::from(config))
    }

    /// Get the client configuration
    pub fn config(&self) -> &CatalogClientConfig {
        &self.config
    }

    /// Build the request URL for a page
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            query.append_pair("limit", &self.config.page_size.to_string());
            if let Some(fields) = &self.config.fields {
                query.append_pair("fields", &fields.join(","));
            }
        }
        url
    }

    /// Fetch and decode one page
    pub async fn get_page(&self, page: u32) -> Result<Page> {
        let url = self.page_url(page);
        debug!("Fetching catalog page {page}: {url}");

        let mut req = self.client.get(url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req
            .send()
            .await
            .map_err(|e| self.request_error(page, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Catalog returned {} for page {page}", status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.request_error(page, e))?;
        let page_data: Page = serde_json::from_str(&body)?;
        debug!(
            "Page {page}: {} rows, {} total",
            page_data.len(),
            page_data.pagination.total
        );
        Ok(page_data)
    }

    /// Map a transport error, reporting timeouts with the configured limit
    fn request_error(&self, page: u32, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            warn!("Request timeout fetching page {page}");
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(e)
        }
    }
}

#[async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<Page> {
        self.get_page(page).await
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

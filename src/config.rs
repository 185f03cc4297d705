//! Table configuration
//!
//! Settings for the catalog endpoint and the bulk selection behavior,
//! loadable from YAML. Every field has a default so an empty file is valid.

use crate::error::{Error, Result, ResultExt};
use crate::types::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

// ============================================================================
// Bulk Scope
// ============================================================================

/// Where "select first N rows" takes its rows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkScope {
    /// Only the rows of the page currently loaded
    CurrentPage,
    /// The loaded page, then following pages fetched on demand
    #[default]
    AcrossPages,
}

// ============================================================================
// Table Config
// ============================================================================

/// Complete table configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Catalog endpoint (without query string)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Bulk selection scope
    #[serde(default)]
    pub bulk_scope: BulkScope,

    /// Send a `fields=` query limiting the response to decoded fields
    #[serde(default = "default_true")]
    pub request_fields: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("artwork-table/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            bulk_scope: BulkScope::default(),
            request_fields: true,
        }
    }
}

impl TableConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml maps an empty document to unit, not to an empty map
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and the base URL
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the bulk scope
    #[must_use]
    pub fn with_bulk_scope(mut self, scope: BulkScope) -> Self {
        self.bulk_scope = scope;
        self
    }
}

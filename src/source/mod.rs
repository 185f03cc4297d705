//! Page sources
//!
//! A page source produces one decoded catalog page per call. The HTTP
//! implementation lives in [`crate::http`]; [`InMemoryCatalog`] serves
//! fixed rows for tests.

mod memory;

pub use memory::InMemoryCatalog;

use crate::error::Result;
use crate::types::Page;
use async_trait::async_trait;

/// Anything that can fetch a one-based catalog page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch page `page` (one-based)
    async fn fetch_page(&self, page: u32) -> Result<Page>;
}

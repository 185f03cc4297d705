//! In-memory page source

use super::PageSource;
use crate::error::{Error, Result};
use crate::types::{Artwork, Page, PaginationInfo, DEFAULT_PAGE_SIZE};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Serves pages out of a fixed row list
#[derive(Debug)]
pub struct InMemoryCatalog {
    rows: Vec<Artwork>,
    page_size: u32,
    failing_pages: HashSet<u32>,
    fetched: Mutex<Vec<u32>>,
}

impl InMemoryCatalog {
    /// Create a catalog over `rows`
    pub fn new(rows: Vec<Artwork>, page_size: u32) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
            failing_pages: HashSet::new(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Create a catalog of `total` generated artworks with ids `1..=total`
    pub fn generated(total: u64, page_size: u32) -> Self {
        Self::new((1..=total).map(sample_artwork).collect(), page_size)
    }

    /// Make every fetch of `page` fail
    #[must_use]
    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Pages fetched so far, in call order
    pub fn fetched_pages(&self) -> Vec<u32> {
        self.fetched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Build page `page` without recording the fetch
    pub fn page(&self, page: u32) -> Result<Page> {
        if page == 0 {
            return Err(Error::PageOutOfRange {
                page,
                total_pages: self.page_count(),
            });
        }
        let size = self.page_size as usize;
        let start = (page as usize - 1).saturating_mul(size);
        let data = self
            .rows
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();

        Ok(Page {
            data,
            pagination: PaginationInfo {
                total: self.rows.len() as u64,
                limit: self.page_size,
                offset: start as u64,
                total_pages: self.page_count(),
                current_page: page,
            },
        })
    }

    fn page_count(&self) -> u32 {
        (self.rows.len() as u64).div_ceil(u64::from(self.page_size)) as u32
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

#[async_trait]
impl PageSource for InMemoryCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Page> {
        self.fetched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page);

        if self.failing_pages.contains(&page) {
            return Err(Error::http_status(503, format!("page {page} unavailable")));
        }

        let page = self.page(page)?;
        debug!(
            "Serving page {} ({} rows)",
            page.pagination.current_page,
            page.len()
        );
        Ok(page)
    }
}

/// Deterministic artwork used by generated catalogs
fn sample_artwork(id: u64) -> Artwork {
    Artwork {
        id,
        title: format!("Untitled #{id}"),
        place_of_origin: "Chicago".to_string(),
        artist_display: format!("Artist {}", id % 7 + 1),
        inscriptions: (id % 3 == 0).then(|| format!("signed l.r.: {id}")),
        date_start: 1850 + (id % 150) as i32,
        date_end: (id % 2 == 0).then(|| 1860 + (id % 150) as i32),
    }
}

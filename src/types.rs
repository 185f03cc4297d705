//! Common types used throughout the artwork table
//!
//! This module contains the catalog data model shared by the page source,
//! the pager and the selection logic.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Rows requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Artwork fields requested from the catalog
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

// ============================================================================
// Artwork
// ============================================================================

/// Unique key of an artwork
pub type ArtworkId = u64;

/// A single catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default)]
    pub inscriptions: Option<String>,
    pub date_start: i32,
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// Catalog text fields may be `null`; those render as empty cells
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination metadata as returned by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Total number of items in the catalog
    pub total: u64,
    /// Page size
    pub limit: u32,
    /// Zero-based offset of the first item on this page
    pub offset: u64,
    /// Page count reported by the server
    pub total_pages: u32,
    /// One-based page number of this response
    pub current_page: u32,
}

impl PaginationInfo {
    /// Number of navigable pages
    ///
    /// Derived from `total / limit` rounded up; the server's `total_pages`
    /// is only used when `limit` is zero.
    pub fn page_count(&self) -> u32 {
        if self.limit == 0 {
            return self.total_pages;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether `page` is a valid one-based page number
    pub fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.page_count()
    }
}

// ============================================================================
// Page
// ============================================================================

/// One decoded catalog response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Artwork>,
    pub pagination: PaginationInfo,
}

impl Page {
    /// Number of rows on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the page has no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

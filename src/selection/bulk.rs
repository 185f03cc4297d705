//! "Select first N rows"
//!
//! The row count comes from free text and is checked against the catalog
//! total. Rows are then taken either from the loaded page alone or from an
//! [`ArtworkStream`] that continues into the following pages.

use super::ArtworkStream;
use crate::error::{Error, Result};
use crate::source::PageSource;
use crate::types::Artwork;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::VecDeque;
use tracing::debug;

/// Parse the row-count prompt input
///
/// Accepts a positive integer no larger than `total`. While no page has
/// loaded `total` is zero and every count is rejected.
pub fn parse_row_count(input: &str, total: u64) -> Result<u64> {
    match input.trim().parse::<u64>() {
        Ok(count) if count > 0 && count <= total => Ok(count),
        _ => Err(Error::invalid_row_count(input, total)),
    }
}

/// The first `count` rows of `rows`
pub fn take_from_page(rows: &[Artwork], count: u64) -> &[Artwork] {
    let end = usize::try_from(count).unwrap_or(usize::MAX).min(rows.len());
    &rows[..end]
}

/// Where an [`ArtworkStream`] starts
///
/// Cloning a cursor and building a new stream from it restarts the sequence.
#[derive(Debug, Clone, Default)]
pub struct PageCursor {
    buffered: VecDeque<Artwork>,
    next_page: u32,
    last_page: Option<u32>,
}

impl PageCursor {
    /// Start by fetching `page`
    pub fn from_page(page: u32) -> Self {
        Self {
            buffered: VecDeque::new(),
            next_page: page.max(1),
            last_page: None,
        }
    }

    /// Start with the rows already loaded for `page`, then fetch the pages after it
    pub fn after_loaded(page: u32, rows: &[Artwork], page_count: Option<u32>) -> Self {
        Self {
            buffered: rows.iter().cloned().collect(),
            next_page: page.saturating_add(1),
            last_page: page_count,
        }
    }

    fn exhausted(&self) -> bool {
        self.last_page.is_some_and(|last| self.next_page > last)
    }
}

/// Lazy, finite sequence of artworks starting at `cursor`
///
/// Pages are fetched one at a time, only when the buffered rows run out.
/// The stream ends after the last page, after an empty page, or after
/// yielding a fetch error.
pub fn artworks_from<'a, S>(source: &'a S, cursor: PageCursor) -> ArtworkStream<'a>
where
    S: PageSource + ?Sized,
{
    let stream = stream::unfold(Some(cursor), move |state| async move {
        let Some(mut cursor) = state else {
            return None;
        };
        loop {
            if let Some(artwork) = cursor.buffered.pop_front() {
                return Some((Ok(artwork), Some(cursor)));
            }
            if cursor.exhausted() {
                return None;
            }

            let page_number = cursor.next_page;
            match source.fetch_page(page_number).await {
                Ok(page) => {
                    debug!("Bulk selection pulled page {page_number} ({} rows)", page.len());
                    if page.is_empty() {
                        return None;
                    }
                    cursor.next_page = page_number.saturating_add(1);
                    cursor.last_page = Some(page.pagination.page_count());
                    cursor.buffered.extend(page.data);
                }
                Err(e) => return Some((Err(e), None)),
            }
        }
    });
    Box::pin(stream)
}

/// Collect the first `count` artworks of `stream`
///
/// Returns fewer rows when the stream ends early; a fetch error aborts.
pub async fn collect_first_n(stream: ArtworkStream<'_>, count: u64) -> Result<Vec<Artwork>> {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    stream.take(count).try_collect().await
}

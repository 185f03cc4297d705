//! Selection module
//!
//! Keeps the user's selected rows and implements the "select first N rows"
//! bulk operation.
//!
//! # Overview
//!
//! - [`SelectionSet`] - ordered, unique-by-id set of selected artworks
//! - [`HeaderCheckbox`] - tri-state header checkbox over the loaded rows
//! - [`parse_row_count`] - validation of the row-count prompt input
//! - [`ArtworkStream`] - lazy row sequence over the loaded page and the
//!   pages after it, used for bulk selection across pages

mod bulk;
mod set;

pub use bulk::{artworks_from, collect_first_n, parse_row_count, take_from_page, PageCursor};
pub use set::{HeaderCheckbox, SelectionSet};

/// Boxed stream of artworks, as produced by [`artworks_from`]
pub type ArtworkStream<'a> = std::pin::Pin<
    Box<dyn futures::Stream<Item = crate::error::Result<crate::types::Artwork>> + Send + 'a>,
>;

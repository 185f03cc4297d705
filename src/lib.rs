// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Artwork Table
//!
//! Paginated browsing of a remote artwork catalog with row selection that
//! spans pages.
//!
//! ## Features
//!
//! - **Bounded paging**: next/previous limited to `[1, total_pages]`
//! - **Stale-response guard**: only the newest page request is applied
//! - **Selection**: row and tri-state header checkboxes, unique by id
//! - **Bulk selection**: "select first N rows", optionally pulling the
//!   following pages on demand
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use artwork_table::{CatalogClient, TableController, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CatalogClient::new()?;
//!     let mut table = TableController::new(client);
//!
//!     table.load().await?;
//!     table.next_page().await?;
//!     table.select_first("20").await?;
//!
//!     println!("{} selected", table.state().selection.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      TableController                         │
//! │   dispatch(Action) → update(state) → effects → PageSource    │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────┬───────────────┴─────┬──────────────┬──────────┐
//! │   State     │   Pagination        │  Selection   │  Source  │
//! ├─────────────┼─────────────────────┼──────────────┼──────────┤
//! │ TableState  │ Pager               │ SelectionSet │ HTTP     │
//! │ Action      │ PageRequest (seq)   │ HeaderCheck  │ InMemory │
//! │ Effect      │                     │ ArtworkStream│          │
//! └─────────────┴─────────────────────┴──────────────┴──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document enum variant fields before publishing

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Catalog data model
pub mod types;

/// Table configuration
pub mod config;

/// Page sources
pub mod source;

/// HTTP catalog client
pub mod http;

/// Pager and request sequencing
pub mod pagination;

/// Selection set and bulk selection
pub mod selection;

/// Table state and reducer
pub mod state;

/// Controller running reducer effects
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{BulkScope, TableConfig};
pub use engine::TableController;
pub use http::CatalogClient;
pub use source::{InMemoryCatalog, PageSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

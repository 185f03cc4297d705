//! Table state module
//!
//! All mutable table state lives in [`TableState`] and changes only through
//! [`update`], which returns the side effects the caller must run (page
//! fetches, alerts, cross-page row collection). Nothing here performs I/O,
//! so every transition is testable without a rendering surface.

mod reducer;
mod types;

pub use reducer::update;
pub use types::{Action, Effect, RowCountPrompt, TableState};

//! Pagination module
//!
//! Tracks the current page and the last pagination metadata received,
//! bounds next/previous navigation, and tags each page request with a
//! sequence number so that only the newest response is applied.

mod pager;

pub use pager::{PageRequest, Pager};

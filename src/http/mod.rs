//! HTTP catalog client module
//!
//! Fetches artwork pages from a remote catalog over HTTP.
//!
//! # Features
//!
//! - **Typed decoding**: response bodies decode straight into [`crate::types::Page`]
//! - **Timeouts**: per-client request timeout
//! - **Error classification**: transport, status, timeout and decode failures
//!
//! Requests are never retried.

mod client;

pub use client::{CatalogClient, CatalogClientConfig, CatalogClientConfigBuilder};

#[cfg(test)]
mod tests;

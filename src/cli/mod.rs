//! CLI module
//!
//! Command-line front end for the artwork table.
//!
//! # Commands
//!
//! - `page` - Print one catalog page
//! - `select` - Bulk-select the first N rows and print the selection
//! - `browse` - Line-driven interactive table

mod commands;
mod render;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ScopeArg};
pub use runner::Runner;

//! CLI commands and argument parsing

use crate::config::BulkScope;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Artwork catalog table
#[derive(Parser, Debug)]
#[command(name = "artwork-table")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog endpoint, overriding the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the catalog
    Page {
        /// One-based page number
        #[arg(default_value = "1")]
        page: u32,
    },

    /// Select the first N rows and print the selection
    Select {
        /// Number of rows to select
        count: String,

        /// Page to load before selecting
        #[arg(long, default_value = "1")]
        page: u32,

        /// Where rows are taken from (defaults to the config file setting)
        #[arg(long)]
        scope: Option<ScopeArg>,
    },

    /// Interactive table reading commands from stdin
    Browse,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable table
    Pretty,
}

/// Bulk selection scope argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScopeArg {
    /// Only the loaded page
    CurrentPage,
    /// The loaded page and the pages after it
    AcrossPages,
}

impl From<ScopeArg> for BulkScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::CurrentPage => BulkScope::CurrentPage,
            ScopeArg::AcrossPages => BulkScope::AcrossPages,
        }
    }
}

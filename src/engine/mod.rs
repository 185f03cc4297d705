//! Table controller module
//!
//! Drives the table reducer against a page source.
//!
//! # Overview
//!
//! The engine module provides:
//! - `TableController` - owns the state, dispatches actions, runs effects
//! - `TableStats` - counters for fetches, failures and alerts

mod types;

pub use types::TableStats;

use crate::config::{BulkScope, TableConfig};
use crate::error::{Error, Result};
use crate::selection::{artworks_from, collect_first_n};
use crate::source::PageSource;
use crate::state::{update, Action, Effect, TableState};
use crate::types::ArtworkId;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Owns the table state and runs the effects of every action
pub struct TableController<S> {
    /// Page source
    source: S,
    /// Table state
    state: TableState,
    /// Alerts raised and not yet taken
    alerts: Vec<String>,
    /// Statistics
    stats: TableStats,
}

impl<S: PageSource> TableController<S> {
    /// Create a controller with the default bulk scope
    pub fn new(source: S) -> Self {
        Self::with_scope(source, BulkScope::default())
    }

    /// Create a controller using the bulk scope from `config`
    pub fn from_config(source: S, config: &TableConfig) -> Self {
        Self::with_scope(source, config.bulk_scope)
    }

    /// Create a controller with an explicit bulk scope
    pub fn with_scope(source: S, bulk_scope: BulkScope) -> Self {
        Self {
            source,
            state: TableState::new(bulk_scope),
            alerts: Vec::new(),
            stats: TableStats::default(),
        }
    }

    /// Get the table state
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get statistics
    pub fn stats(&self) -> &TableStats {
        &self.stats
    }

    /// Alerts raised so far
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Remove and return pending alerts
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Apply `action` and run every effect it leads to
    ///
    /// A failed fetch leaves the state as it was; the error is logged and
    /// also returned.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut queue = VecDeque::from([action]);
        let mut failure = None;

        while let Some(action) = queue.pop_front() {
            for effect in update(&mut self.state, action) {
                match effect {
                    Effect::Fetch(request) => {
                        self.stats.add_fetch();
                        match self.source.fetch_page(request.page).await {
                            Ok(page) => queue.push_back(Action::PageLoaded {
                                seq: request.seq,
                                page,
                            }),
                            Err(e) => {
                                self.stats.add_failure();
                                queue.push_back(Action::PageFailed {
                                    seq: request.seq,
                                    error: e.to_string(),
                                });
                                failure = Some(e);
                            }
                        }
                    }
                    Effect::Alert(message) => {
                        warn!("{message}");
                        self.stats.add_alert();
                        self.alerts.push(message);
                    }
                    Effect::CollectRows { count, cursor } => {
                        debug!("Collecting {count} rows across pages");
                        let stream = artworks_from(&self.source, cursor);
                        match collect_first_n(stream, count).await {
                            Ok(rows) => queue.push_back(Action::BulkRowsCollected { rows }),
                            Err(e) => {
                                self.stats.add_failure();
                                queue.push_back(Action::BulkCollectFailed {
                                    error: e.to_string(),
                                });
                                failure = Some(e);
                            }
                        }
                    }
                }
            }
        }

        failure.map_or(Ok(()), Err)
    }

    /// Load the first page
    pub async fn load(&mut self) -> Result<()> {
        self.dispatch(Action::GoToPage(1)).await
    }

    /// Go to a page; out-of-range pages are ignored
    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        self.dispatch(Action::GoToPage(page)).await
    }

    /// Go to the next page
    pub async fn next_page(&mut self) -> Result<()> {
        self.dispatch(Action::NextPage).await
    }

    /// Go to the previous page
    pub async fn previous_page(&mut self) -> Result<()> {
        self.dispatch(Action::PreviousPage).await
    }

    /// Toggle one row checkbox
    pub async fn toggle_row(&mut self, id: ArtworkId) -> Result<()> {
        self.dispatch(Action::ToggleRow(id)).await
    }

    /// Toggle the header checkbox
    pub async fn toggle_header(&mut self) -> Result<()> {
        self.dispatch(Action::ToggleHeader).await
    }

    /// Deselect everything
    pub async fn clear_selection(&mut self) -> Result<()> {
        self.dispatch(Action::ClearSelection).await
    }

    /// Submit `input` through the row-count prompt
    ///
    /// Returns the number of rows newly added to the selection. Rejected
    /// input raises an alert and returns `Error::InvalidRowCount`.
    pub async fn select_first(&mut self, input: &str) -> Result<usize> {
        let before = self.state.selection.len();
        let alerts_before = self.alerts.len();

        self.dispatch(Action::OpenPrompt).await?;
        self.dispatch(Action::SetPromptInput(input.to_string()))
            .await?;
        self.dispatch(Action::SubmitPrompt).await?;

        if self.alerts.len() > alerts_before {
            return Err(Error::invalid_row_count(
                input,
                self.state.pager.total_items(),
            ));
        }
        Ok(self.state.selection.len() - before)
    }
}

impl<S> std::fmt::Debug for TableController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableController")
            .field("state", &self.state)
            .field("alerts", &self.alerts)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

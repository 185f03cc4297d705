//! State, action and effect types

use crate::config::BulkScope;
use crate::pagination::{PageRequest, Pager};
use crate::selection::{HeaderCheckbox, PageCursor, SelectionSet};
use crate::types::{Artwork, ArtworkId, Page};

/// The open "select first N rows" prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCountPrompt {
    /// Text typed so far
    pub input: String,
}

/// Everything the table shows
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Page navigation
    pub pager: Pager,
    /// Rows of the current page, in load order
    pub rows: Vec<Artwork>,
    /// Selected rows across all pages
    pub selection: SelectionSet,
    /// Row-count prompt, when open
    pub prompt: Option<RowCountPrompt>,
    /// Where bulk selection takes rows from
    pub bulk_scope: BulkScope,
    /// Last fetch failure, cleared by the next successful load
    pub last_error: Option<String>,
}

impl TableState {
    /// Empty state using `bulk_scope` for bulk selection
    pub fn new(bulk_scope: BulkScope) -> Self {
        Self {
            bulk_scope,
            ..Self::default()
        }
    }

    /// Header checkbox state for the loaded rows
    pub fn header_checkbox(&self) -> HeaderCheckbox {
        self.selection.header_state(&self.rows)
    }

    /// Whether a loaded row is selected
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.contains(id)
    }
}

/// User input and async completions
#[derive(Debug, Clone)]
pub enum Action {
    /// Go to a one-based page
    GoToPage(u32),
    /// Go to the next page
    NextPage,
    /// Go to the previous page
    PreviousPage,
    /// A page fetch succeeded
    PageLoaded { seq: u64, page: Page },
    /// A page fetch failed
    PageFailed { seq: u64, error: String },
    /// Row checkbox click
    ToggleRow(ArtworkId),
    /// Header checkbox click
    ToggleHeader,
    /// Open the row-count prompt
    OpenPrompt,
    /// Close the row-count prompt without submitting
    ClosePrompt,
    /// Replace the prompt text
    SetPromptInput(String),
    /// Submit the prompt text
    SubmitPrompt,
    /// Rows gathered for a cross-page bulk selection
    BulkRowsCollected { rows: Vec<Artwork> },
    /// Gathering rows for a bulk selection failed
    BulkCollectFailed { error: String },
    /// Deselect everything
    ClearSelection,
}

/// Work requested by [`super::update`]
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch a page and report back with `PageLoaded` / `PageFailed`
    Fetch(PageRequest),
    /// Show a blocking message to the user
    Alert(String),
    /// Collect `count` rows starting at `cursor`, then report back with
    /// `BulkRowsCollected` / `BulkCollectFailed`
    CollectRows { count: u64, cursor: PageCursor },
}

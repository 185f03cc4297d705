//! State transitions

use super::types::{Action, Effect, RowCountPrompt, TableState};
use crate::config::BulkScope;
use crate::pagination::PageRequest;
use crate::selection::{parse_row_count, take_from_page, PageCursor};
use crate::types::{Artwork, ArtworkId};
use tracing::{debug, info, warn};

/// Apply `action` to `state` and return the effects to run
pub fn update(state: &mut TableState, action: Action) -> Vec<Effect> {
    match action {
        Action::GoToPage(page) => fetch(state.pager.go_to_page(page)),
        Action::NextPage => fetch(state.pager.next()),
        Action::PreviousPage => fetch(state.pager.previous()),
        Action::PageLoaded { seq, page } => {
            match state.pager.complete(seq, page.pagination) {
                Some(number) => {
                    debug!("Loaded page {number} ({} rows)", page.len());
                    state.rows = page.data;
                    state.last_error = None;
                }
                None => debug!("Discarding stale response for request {seq}"),
            }
            Vec::new()
        }
        Action::PageFailed { seq, error } => {
            if state.pager.fail(seq) {
                warn!("Error fetching artworks: {error}");
                state.last_error = Some(error);
            } else {
                debug!("Ignoring failure of superseded request {seq}: {error}");
            }
            Vec::new()
        }
        Action::ToggleRow(id) => {
            toggle_row(state, id);
            Vec::new()
        }
        Action::ToggleHeader => {
            let header = state.selection.toggle_all(&state.rows);
            debug!("Header checkbox now {header:?}");
            Vec::new()
        }
        Action::OpenPrompt => {
            state.prompt.get_or_insert_with(RowCountPrompt::default);
            Vec::new()
        }
        Action::ClosePrompt => {
            state.prompt = None;
            Vec::new()
        }
        Action::SetPromptInput(input) => {
            state.prompt.get_or_insert_with(RowCountPrompt::default).input = input;
            Vec::new()
        }
        Action::SubmitPrompt => submit_prompt(state),
        Action::BulkRowsCollected { rows } => {
            append_rows(state, &rows);
            Vec::new()
        }
        Action::BulkCollectFailed { error } => {
            warn!("Error fetching artworks for bulk selection: {error}");
            state.last_error = Some(error);
            Vec::new()
        }
        Action::ClearSelection => {
            state.selection.clear();
            Vec::new()
        }
    }
}

fn fetch(request: Option<PageRequest>) -> Vec<Effect> {
    request.map(Effect::Fetch).into_iter().collect()
}

fn toggle_row(state: &mut TableState, id: ArtworkId) {
    if let Some(artwork) = state.rows.iter().find(|a| a.id == id) {
        let selected = state.selection.toggle(artwork);
        debug!("Row {id} selected: {selected}");
    } else if state.selection.remove(id).is_some() {
        debug!("Row {id} deselected from another page");
    }
}

fn submit_prompt(state: &mut TableState) -> Vec<Effect> {
    let input = state
        .prompt
        .as_ref()
        .map(|p| p.input.clone())
        .unwrap_or_default();
    let total = state.pager.total_items();

    let count = match parse_row_count(&input, total) {
        Ok(count) => count,
        Err(e) => return vec![Effect::Alert(e.to_string())],
    };

    let on_page = state.rows.len() as u64;
    if state.bulk_scope == BulkScope::CurrentPage || count <= on_page {
        let rows = take_from_page(&state.rows, count).to_vec();
        append_rows(state, &rows);
        return Vec::new();
    }

    let cursor = PageCursor::after_loaded(
        state.pager.current_page(),
        &state.rows,
        state.pager.page_count(),
    );
    vec![Effect::CollectRows { count, cursor }]
}

fn append_rows(state: &mut TableState, rows: &[Artwork]) {
    let added = state.selection.extend(rows);
    info!(
        "Bulk selected {} rows ({added} new, {} total)",
        rows.len(),
        state.selection.len()
    );
    state.prompt = None;
}

//! Text and JSON rendering of the table

use crate::selection::{HeaderCheckbox, SelectionSet};
use crate::state::TableState;
use crate::types::Artwork;
use serde_json::{json, Value};

const TITLE_WIDTH: usize = 32;
const ORIGIN_WIDTH: usize = 14;
const ARTIST_WIDTH: usize = 28;
const INSCRIPTION_WIDTH: usize = 24;

/// The loaded page as a text table with checkboxes and the pager footer
pub fn render_page(state: &TableState) -> String {
    let mut out = String::new();
    let header = match state.header_checkbox() {
        HeaderCheckbox::Empty => "[ ]",
        HeaderCheckbox::Mixed => "[-]",
        HeaderCheckbox::Full => "[x]",
    };
    out.push_str(&format!(
        "{header} {:>7}  {:<TITLE_WIDTH$}  {:<ORIGIN_WIDTH$}  {:<ARTIST_WIDTH$}  {:<INSCRIPTION_WIDTH$}  {:>5}  {:>5}\n",
        "ID", "Title", "Place of Origin", "Artist", "Inscriptions", "Start", "End"
    ));
    for artwork in &state.rows {
        let mark = if state.is_selected(artwork.id) { "[x]" } else { "[ ]" };
        out.push_str(&format!("{mark} {}\n", render_row(artwork)));
    }
    if state.rows.is_empty() {
        out.push_str("    (no rows)\n");
    }

    let prev = if state.pager.can_go_previous() { "<prev" } else { "     " };
    let next = if state.pager.can_go_next() { "next>" } else { "     " };
    out.push_str(&format!(
        "{prev}  {}  {next}   {} selected\n",
        state.pager.label(),
        state.selection.len()
    ));
    if let Some(error) = &state.last_error {
        out.push_str(&format!("last fetch failed: {error}\n"));
    }
    out
}

/// Selected rows, one per line
pub fn render_selection(selection: &SelectionSet) -> String {
    let mut out = String::new();
    for artwork in selection {
        out.push_str(&render_row(artwork));
        out.push('\n');
    }
    out.push_str(&format!("{} rows selected\n", selection.len()));
    out
}

fn render_row(artwork: &Artwork) -> String {
    format!(
        "{:>7}  {:<TITLE_WIDTH$}  {:<ORIGIN_WIDTH$}  {:<ARTIST_WIDTH$}  {:<INSCRIPTION_WIDTH$}  {:>5}  {:>5}",
        artwork.id,
        truncate(&artwork.title, TITLE_WIDTH),
        truncate(&artwork.place_of_origin, ORIGIN_WIDTH),
        truncate(&artwork.artist_display, ARTIST_WIDTH),
        truncate(artwork.inscriptions.as_deref().unwrap_or("-"), INSCRIPTION_WIDTH),
        artwork.date_start,
        artwork.date_end.map_or_else(|| "-".to_string(), |y| y.to_string()),
    )
}

/// First line of `text`, cut to `width` characters with an ellipsis
pub(crate) fn truncate(text: &str, width: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= width {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// The loaded page as JSON
pub fn page_json(state: &TableState) -> Value {
    json!({
        "page": state.pager.current_page(),
        "total_pages": state.pager.page_count(),
        "pagination": state.pager.pagination(),
        "rows": state.rows,
        "selected": state.selection.ids(),
    })
}

/// The selection as JSON
pub fn selection_json(selection: &SelectionSet) -> Value {
    json!({
        "count": selection.len(),
        "rows": selection.as_slice(),
    })
}

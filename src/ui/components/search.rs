//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the query
//! text, and the clear-search control.

use crate::ui::helpers::{position_cursor, push_padded, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ClearControl, SearchBarInfo};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Label shown while a search is in flight.
const SPINNER_LABEL: &str = "searching… ";

/// Label of the clear control.
const CLEAR_LABEL: &str = "✕ :clear ";

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ Search: cats        ✕ :clear │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// The control at the right edge is absent for an empty query, replaced by
/// a spinner label while loading, and shows the clear hint otherwise.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let (control, control_color) = match search.clear_control {
        ClearControl::Hidden => ("", &theme.colors.text_dim),
        ClearControl::Spinner => (SPINNER_LABEL, &theme.colors.spinner_fg),
        ClearControl::Clear => (CLEAR_LABEL, &theme.colors.text_dim),
    };
    let control_len = visible_len(control);
    let search_text = format!(" Search: {}", search.query);

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    push_padded(out, &search_text, inner_width.saturating_sub(control_len));
    out.push_str(&Theme::fg(control_color));
    out.push_str(control);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}

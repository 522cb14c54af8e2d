//! Composable UI component renderers.
//!
//! Each component appends the ANSI text for one part of the interface to a
//! frame buffer and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with result count
//! - [`search`]: Search input box with the clear control
//! - [`grid`]: Photo tiles
//! - [`empty`]: "No results found" message
//! - [`dialog`]: Detail dialog (placeholder or full detail)
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Query heading + blank]   (only with a query)
//! [Grid | Empty state | Dialog]
//! [Border]
//! [Footer]
//! ```

pub mod dialog;
pub mod empty;
pub mod footer;
pub mod grid;
pub mod header;
pub mod search;

use crate::ui::helpers::{position_cursor, push_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dialog::render_dialog;
use empty::render_empty_state;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the "Results for" line followed by a blank separator line.
fn render_query_heading(out: &mut String, row: usize, query: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    push_padded(out, &format!(" Results for \"{query}\""), cols);
    out.push_str(Theme::reset());
    row + 2
}

/// Renders the full screen layout for a view model.
///
/// The content area between the search chrome and the footer shows, in
/// priority order, the dialog, the empty state, or the grid.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    if let Some(query) = &vm.query_heading {
        current_row = render_query_heading(out, current_row, query, theme, cols);
    }

    let footer_row = rows.max(current_row + 2);
    let border_row = footer_row - 1;

    if let Some(dialog) = &vm.dialog {
        render_dialog(out, current_row, border_row - 1, dialog, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row, empty, theme, cols);
    } else {
        render_grid(out, current_row, &vm.tiles, vm.columns, theme, cols);
    }

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, vm.hidden_tiles, theme, cols);
}

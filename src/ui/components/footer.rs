//! Footer component renderer.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays command hints centered horizontally in the dim color, prefixed
/// with the number of tiles that did not fit when the grid was cut off. Text
/// wider than the terminal is truncated.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    hidden_tiles: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let help_text = if hidden_tiles > 0 {
        format!("+{hidden_tiles} more  {}", footer.keybindings)
    } else {
        footer.keybindings.clone()
    };

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &help_text, cols);
    out.push_str(Theme::reset());
    row + 1
}

//! Photo grid component renderer.
//!
//! Lays tiles out left to right in rows of `columns`. Each grid row takes two
//! lines:
//!
//! ```text
//! [1] Ann (@ann)     ♥ 1.2k  [2] Bob (@bob)       ♥ 40
//!   brown mountain under…      a cat on a sofa
//! ```

use crate::ui::helpers::{position_cursor, push_padded, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TileItem;

/// Renders all tiles starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_grid(out: &mut String, row: usize, tiles: &[TileItem], columns: usize, theme: &Theme, cols: usize) -> usize {
    let columns = columns.max(1);
    let tile_width = cols / columns;
    let mut current_row = row;

    for grid_row in tiles.chunks(columns) {
        position_cursor(out, current_row, 1);
        for tile in grid_row {
            render_tile_title(out, tile, theme, tile_width);
        }

        position_cursor(out, current_row + 1, 1);
        for tile in grid_row {
            render_tile_caption(out, tile, theme, tile_width);
        }

        current_row += 2;
    }

    current_row
}

/// Renders `[n] author (@username)` left-aligned and `♥ likes` right-aligned
/// within the tile width.
fn render_tile_title(out: &mut String, tile: &TileItem, theme: &Theme, width: usize) {
    let index = format!("[{}] ", tile.index);
    let likes = format!(" ♥ {} ", tile.likes);
    let name_width = width.saturating_sub(visible_len(&index) + visible_len(&likes));
    let name = format!("{} (@{})", tile.author, tile.username);

    if tile.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
        push_padded(out, &format!("{index}{name}"), width.saturating_sub(visible_len(&likes)));
        push_padded(out, &likes, visible_len(&likes).min(width));
    } else {
        out.push_str(&Theme::fg(&theme.colors.accent_fg));
        push_padded(out, &index, visible_len(&index).min(width));
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        push_padded(out, &name, name_width);
        out.push_str(&Theme::fg(&theme.colors.accent_fg));
        push_padded(out, &likes, width.saturating_sub(visible_len(&index) + name_width));
    }
    out.push_str(Theme::reset());
}

fn render_tile_caption(out: &mut String, tile: &TileItem, theme: &Theme, width: usize) {
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_padded(out, &format!("  {}", tile.caption), width);
    out.push_str(Theme::reset());
}

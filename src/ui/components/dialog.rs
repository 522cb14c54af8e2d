//! Detail dialog component renderer.
//!
//! The dialog replaces the grid while a photo is selected. Its frame uses the
//! photo's accent color when the detail has one.

use crate::ui::helpers::{position_cursor, push_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, DialogView};

/// Horizontal margin around the dialog frame.
const DIALOG_MARGIN: usize = 2;

/// A styled line inside the dialog.
struct Line {
    color: String,
    text: String,
}

/// Renders the dialog between `row` and `last_row` (inclusive).
///
/// Lines that do not fit are dropped from the bottom; the frame is always
/// closed.
///
/// # Returns
///
/// The next available row position.
pub fn render_dialog(
    out: &mut String,
    row: usize,
    last_row: usize,
    dialog: &DialogView,
    theme: &Theme,
    cols: usize,
) -> usize {
    let (frame_color, lines) = match dialog {
        DialogView::Placeholder { id } => (
            theme.colors.border.clone(),
            vec![
                Line {
                    color: theme.colors.text_dim.clone(),
                    text: format!("Loading photo {id}…"),
                },
                Line {
                    color: theme.colors.text_dim.clone(),
                    text: ":close to dismiss".to_string(),
                },
            ],
        ),
        DialogView::Detail(detail) => (
            detail.accent_color.clone().unwrap_or_else(|| theme.colors.border.clone()),
            detail_lines(detail, theme),
        ),
    };

    let inner_width = cols.saturating_sub(DIALOG_MARGIN * 2 + 2);
    let margin = " ".repeat(DIALOG_MARGIN);
    let frame = Theme::fg(&frame_color);
    // Top and bottom borders take two rows.
    let capacity = (last_row + 1).saturating_sub(row).saturating_sub(2);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&frame);
    out.push_str(&format!("╭{}╮", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let mut current_row = row + 1;
    for line in lines.iter().take(capacity) {
        position_cursor(out, current_row, 1);
        out.push_str(&margin);
        out.push_str(&frame);
        out.push('│');
        out.push_str(&Theme::fg(&line.color));
        push_padded(out, &format!(" {}", line.text), inner_width);
        out.push_str(&frame);
        out.push('│');
        out.push_str(Theme::reset());
        current_row += 1;
    }

    position_cursor(out, current_row, 1);
    out.push_str(&margin);
    out.push_str(&frame);
    out.push_str(&format!("╰{}╯", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    current_row + 1
}

fn detail_lines(detail: &DetailView, theme: &Theme) -> Vec<Line> {
    let colors = &theme.colors;
    let line = |color: &str, text: String| Line {
        color: color.to_string(),
        text,
    };

    let mut lines = vec![line(
        &colors.header_fg,
        format!("{} (@{})", detail.author_name, detail.username),
    )];

    if let Some(published) = &detail.published {
        lines.push(line(&colors.text_dim, format!("Published {published}")));
    }
    lines.push(line(&colors.text_normal, String::new()));

    if let Some(description) = &detail.description {
        lines.push(line(&colors.text_normal, description.clone()));
    }
    if !detail.image_url.is_empty() {
        lines.push(line(&colors.link_fg, detail.image_url.clone()));
    }

    lines.push(line(
        &colors.accent_fg,
        format!("♥ {} likes   ⬇ {} downloads", detail.likes, detail.downloads),
    ));

    if !detail.tags.is_empty() {
        let chips: Vec<String> = detail.tags.iter().map(|t| format!("[{t}]")).collect();
        lines.push(line(&colors.tag_fg, format!("Tags: {}", chips.join(" "))));
    }

    for social in &detail.social_links {
        lines.push(line(&colors.link_fg, format!("{}: {}", social.network.label(), social.url)));
    }
    if let Some(profile) = &detail.profile_url {
        lines.push(line(&colors.link_fg, format!("Profile: {profile}")));
    }
    if let Some(portfolio) = &detail.portfolio_url {
        lines.push(line(&colors.link_fg, format!("Portfolio: {portfolio}")));
    }
    if let Some(avatar) = &detail.avatar_url {
        lines.push(line(&colors.text_dim, format!("Avatar: {avatar}")));
    }
    if let Some(download) = &detail.download_url {
        lines.push(line(&colors.link_fg, format!("Download: {download}")));
    }

    lines
}

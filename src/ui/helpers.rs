//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used across UI components: cursor positioning
//! into a frame buffer, width-aware truncation, and compact counters. All
//! widths are measured in characters, not bytes.

use std::fmt::Write;

/// Appends an ANSI cursor positioning sequence to `out`.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Example
///
/// ```rust
/// use photogrid::ui::helpers::position_cursor;
///
/// let mut frame = String::new();
/// position_cursor(&mut frame, 5, 1);
/// assert_eq!(frame, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    text.chars().count()
}

/// Replaces control characters (newlines, tabs, `ESC`, `BEL`, ...) with
/// spaces so that service-supplied text cannot move the cursor or emit
/// escape sequences.
///
/// # Example
///
/// ```rust
/// use photogrid::ui::helpers::sanitize;
///
/// assert_eq!(sanitize("Sunset\nover the bay"), "Sunset over the bay");
/// assert_eq!(sanitize("\u{1b}[2J"), " [2J");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

/// Truncates `text` to at most `max` characters, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use photogrid::ui::helpers::truncate;
///
/// assert_eq!(truncate("mountain", 20), "mountain");
/// assert_eq!(truncate("mountain lake", 5), "moun…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if visible_len(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Appends `text` centered in a field of `width` characters.
pub fn push_centered(out: &mut String, text: &str, width: usize) {
    let len = visible_len(text).min(width);
    let padding = width.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(padding));
    out.push_str(&truncate(text, width));
    out.push_str(&" ".repeat(width.saturating_sub(padding + len)));
}

/// Appends `text` left-aligned in a field of `width` characters.
pub fn push_padded(out: &mut String, text: &str, width: usize) {
    let text = truncate(text, width);
    let len = visible_len(&text);
    out.push_str(&text);
    out.push_str(&" ".repeat(width.saturating_sub(len)));
}

/// Formats a counter compactly: `999`, `1.5k`, `12.3k`, `2M`.
///
/// # Example
///
/// ```rust
/// use photogrid::ui::helpers::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1500), "1.5k");
/// ```
#[must_use]
pub fn format_count(count: u64) -> String {
    match count {
        0..=999 => count.to_string(),
        1_000..=999_999 => with_suffix(count, 1_000, "k"),
        _ => with_suffix(count, 1_000_000, "M"),
    }
}

fn with_suffix(count: u64, unit: u64, suffix: &str) -> String {
    let tenths = count / (unit / 10);
    if tenths % 10 == 0 {
        format!("{}{suffix}", tenths / 10)
    } else {
        format!("{}.{}{suffix}", tenths / 10, tenths % 10)
    }
}

//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting built-in themes
//! and custom themes loaded from TOML files. It provides utilities for
//! converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `material-dark`: Dark Material palette (default)
//! - `material-light`: Light Material palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! selection_fg = "#121212"
//! selection_bg = "#90caf9"
//! text_normal = "#ffffff"
//! text_dim = "#b3b3b3"
//! border = "#3d3d3d"
//! search_bar_border = "#90caf9"
//! spinner_fg = "#ce93d8"
//! empty_state_fg = "#90caf9"
//! accent_fg = "#f48fb1"
//! tag_fg = "#b3b3b3"
//! link_fg = "#90caf9"
//! ```
//!
//! # Example
//!
//! ```rust
//! use photogrid::ui::Theme;
//!
//! let theme = Theme::from_name("material-dark").unwrap();
//! let title = format!("{}{}Photos{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(title.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::error::{PhotoGridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "material-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#90caf9"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected tile foreground color.
    pub selection_fg: String,
    /// Selected tile background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, captions, secondary info).
    pub text_dim: String,

    /// Border and separator line color. Also the dialog frame color when
    /// the photo has no accent color.
    pub border: String,

    pub search_bar_border: String,
    /// Loading indicator in the search bar.
    pub spinner_fg: String,

    pub empty_state_fg: String,

    /// Tile index and like counters.
    pub accent_fg: String,

    /// Tag chips in the detail dialog.
    pub tag_fg: String,

    /// URLs in the detail dialog.
    pub link_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "material-dark" => include_str!("../../themes/material-dark.toml"),
            "material-light" => include_str!("../../themes/material-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoGridError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PhotoGridError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| PhotoGridError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand into RGB components.
    ///
    /// Unparseable input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        const WHITE: (u8, u8, u8) = (255, 255, 255);

        let digits = hex.trim().trim_start_matches('#');
        let Ok(value) = u32::from_str_radix(digits, 16) else {
            return WHITE;
        };

        match digits.len() {
            6 => ((value >> 16) as u8, (value >> 8) as u8, value as u8),
            3 => {
                let expand = |nibble: u32| (nibble & 0xf) as u8 * 0x11;
                (expand(value >> 8), expand(value >> 4), expand(value))
            }
            _ => WHITE,
        }
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Material Dark).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the unit tests rule
    /// out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in material-dark theme should always parse")
    }
}

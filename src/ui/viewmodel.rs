//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data: formatted counters, truncated captions, and the
//! resolved dialog contents.

use crate::domain::SocialLink;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Search input box.
    pub search_bar: SearchBarInfo,

    /// Echo of the current query, shown above the grid when non-empty.
    pub query_heading: Option<String>,

    /// Tiles that fit in the viewport, in display order.
    pub tiles: Vec<TileItem>,

    /// Number of tiles per grid row.
    pub columns: usize,

    /// Tiles that did not fit in the viewport.
    pub hidden_tiles: usize,

    /// Shown instead of the grid when the list is empty.
    pub empty_state: Option<EmptyState>,

    /// Detail dialog, when open. Replaces the grid.
    pub dialog: Option<DialogView>,

    /// Footer information (command hints).
    pub footer: FooterInfo,
}

/// One photo in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileItem {
    /// 1-based position, used by `:open N`.
    pub index: usize,

    pub id: String,

    /// Uploader display name, truncated to the tile width.
    pub author: String,

    pub username: String,

    /// Formatted like count (`"1.2k"`).
    pub likes: String,

    /// Alt text, truncated to the tile width.
    pub caption: String,

    /// Whether the detail dialog is open for this photo.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message ("No results found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Control shown at the right edge of the box.
    pub clear_control: ClearControl,
}

/// State of the clear-search control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearControl {
    /// Query is empty; nothing to clear.
    Hidden,
    /// A search is in flight; clearing is disabled.
    Spinner,
    /// Clearing is available.
    Clear,
}

/// Detail dialog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    /// Detail still loading (or failed to load) for `id`.
    Placeholder { id: String },
    /// Detail available.
    Detail(DetailView),
}

/// Display-ready fields of a fetched photo detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub image_url: String,
    pub description: Option<String>,
    /// `#rrggbb` accent color used for the dialog frame.
    pub accent_color: Option<String>,
    pub author_name: String,
    pub username: String,
    pub profile_url: Option<String>,
    pub avatar_url: Option<String>,
    /// Personal website from the user's profile.
    pub portfolio_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub tags: Vec<String>,
    pub downloads: String,
    pub likes: String,
    pub download_url: Option<String>,
    /// Relative publication time ("3d ago").
    pub published: Option<String>,
}

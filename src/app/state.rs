//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the feed
//! and the detail dialog. It is mutated only by
//! [`handle_event`](crate::app::handle_event) on the event loop, so every
//! transition is atomic with respect to other events.
//!
//! # State Components
//!
//! - **Images**: the displayed list, replaced wholesale by each completed fetch
//! - **Query**: the current search text; empty means "unfiltered feed"
//! - **Loading**: derived from the number of searches in flight
//! - **Selection**: the detail dialog state machine
//! - **Debounce bookkeeping**: the one-shot first-effect guard and the token
//!   of the currently scheduled search
//!
//! # Example
//!
//! ```rust
//! use photogrid::app::AppState;
//! use photogrid::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! assert!(state.query.is_empty());
//! assert!(!state.is_loading());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::SelectionState;
use crate::domain::{ImageDetail, ImageSummary, SocialLink};
use crate::ui::helpers::{format_count, sanitize, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ClearControl, DetailView, DialogView, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    TileItem, UIViewModel,
};

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: usize = 3;

/// Lines used by one grid row (title line + caption line).
const TILE_HEIGHT: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Photos currently displayed in the grid.
    ///
    /// Consistent with the last completed fetch, not necessarily with the
    /// current query text.
    pub images: Vec<ImageSummary>,

    /// Current search query.
    pub query: String,

    /// Detail dialog state.
    pub selection: SelectionState,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Number of grid columns.
    pub columns: usize,

    /// Searches started and not yet answered.
    searches_in_flight: usize,

    /// One-shot guard: the first query effect (at mount) is skipped.
    skip_first_query_effect: bool,

    /// Last token handed out to a scheduled search.
    last_search_token: u64,

    /// Token of the scheduled search that is allowed to fire.
    pending_search: Option<u64>,
}

impl AppState {
    /// Creates an empty state with the given theme.
    ///
    /// The first-effect guard is armed here and nowhere else.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            images: Vec::new(),
            query: String::new(),
            selection: SelectionState::Closed,
            theme,
            columns: DEFAULT_COLUMNS,
            searches_in_flight: 0,
            skip_first_query_effect: true,
            last_search_token: 0,
            pending_search: None,
        }
    }

    /// Sets the number of grid columns (at least one).
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Returns `true` while at least one search request is in flight.
    ///
    /// Gates the clear-search control.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.searches_in_flight > 0
    }

    /// Number of searches started and not yet answered.
    #[must_use]
    pub const fn searches_in_flight(&self) -> usize {
        self.searches_in_flight
    }

    /// Token of the search waiting for its quiet period, if any.
    #[must_use]
    pub const fn pending_search_token(&self) -> Option<u64> {
        self.pending_search
    }

    /// Identifier of the photo shown at 1-based grid position `position`.
    #[must_use]
    pub fn image_id_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.images.get(i))
            .map(|image| image.id.as_str())
    }

    /// Consumes the first-effect guard.
    ///
    /// Returns `true` exactly once per state, on the first call.
    pub(crate) fn consume_first_query_effect(&mut self) -> bool {
        std::mem::replace(&mut self.skip_first_query_effect, false)
    }

    /// Registers a new scheduled search, superseding any previous one, and
    /// returns its token.
    pub(crate) fn schedule_search(&mut self) -> u64 {
        self.last_search_token += 1;
        self.pending_search = Some(self.last_search_token);
        self.last_search_token
    }

    /// Forgets the scheduled search so that a late timer cannot fire it.
    pub(crate) fn cancel_pending_search(&mut self) {
        self.pending_search = None;
    }

    /// Claims the scheduled search identified by `token`.
    ///
    /// Returns `false` for a superseded or cancelled token.
    pub(crate) fn take_pending_search(&mut self, token: u64) -> bool {
        if self.pending_search == Some(token) {
            self.pending_search = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn begin_search(&mut self) {
        self.searches_in_flight += 1;
    }

    pub(crate) fn finish_search(&mut self) {
        self.searches_in_flight = self.searches_in_flight.saturating_sub(1);
    }

    /// Computes a renderable UI view model for a terminal of `rows` by `cols`.
    ///
    /// # Windowing
    ///
    /// The grid gets whatever rows remain after the chrome (header, search
    /// bar, optional query heading, footer). Each grid row takes two lines;
    /// tiles beyond the visible rows are dropped from the view model. When
    /// the dialog is open it replaces the grid.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let query = sanitize(&self.query);
        let query_heading = (!query.is_empty()).then(|| query.clone());

        let dialog = self.compute_dialog();

        let empty_state = if self.images.is_empty() {
            Some(EmptyState {
                message: "No results found".to_string(),
                subtitle: if self.query.is_empty() {
                    "The feed is empty".to_string()
                } else {
                    format!("Nothing matches \"{query}\"")
                },
            })
        } else {
            None
        };

        let visible_rows = self.calculate_available_rows(rows, query_heading.is_some()) / TILE_HEIGHT;
        let max_tiles = visible_rows * self.columns;
        let tile_width = (cols / self.columns).max(1);

        let selected_id = self.selection.selected_id();
        let tiles = self
            .images
            .iter()
            .take(max_tiles)
            .enumerate()
            .map(|(i, image)| Self::compute_tile(image, i + 1, tile_width, selected_id))
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(query),
            query_heading,
            tiles,
            columns: self.columns,
            hidden_tiles: self.images.len().saturating_sub(max_tiles),
            empty_state,
            dialog,
            footer: self.compute_footer(),
        }
    }

    fn compute_tile(image: &ImageSummary, index: usize, width: usize, selected_id: Option<&str>) -> TileItem {
        let caption = sanitize(image.alt_description.as_deref().unwrap_or_default());
        TileItem {
            index,
            id: image.id.clone(),
            author: truncate(&sanitize(image.user.display_name()), width.saturating_sub(6)),
            username: sanitize(&image.user.username),
            likes: format_count(image.like_count()),
            caption: truncate(&caption, width.saturating_sub(2)),
            is_selected: selected_id == Some(image.id.as_str()),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.query.is_empty() {
            format!(" Photos ({}) ", self.images.len())
        } else {
            format!(" Search results ({}) ", self.images.len())
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self, query: String) -> SearchBarInfo {
        let clear_control = if query.is_empty() {
            ClearControl::Hidden
        } else if self.is_loading() {
            ClearControl::Spinner
        } else {
            ClearControl::Clear
        };

        SearchBarInfo {
            query,
            clear_control,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selection.is_open() {
            "Type to search  :close close details  :q quit".to_string()
        } else if self.query.is_empty() {
            "Type to search  :open N details  :q quit".to_string()
        } else {
            "Type to search  :clear reset  :open N details  :q quit".to_string()
        };
        FooterInfo { keybindings }
    }

    fn compute_dialog(&self) -> Option<DialogView> {
        match &self.selection {
            SelectionState::Closed => None,
            SelectionState::OpenPending { id } => Some(DialogView::Placeholder { id: sanitize(id) }),
            SelectionState::OpenReady(detail) => Some(DialogView::Detail(Self::compute_detail_view(detail))),
        }
    }

    fn compute_detail_view(detail: &ImageDetail) -> DetailView {
        let text = |value: Option<&str>| value.map(sanitize);
        DetailView {
            id: sanitize(&detail.id),
            image_url: sanitize(detail.full_url()),
            description: text(detail.display_description()),
            accent_color: detail.color.clone(),
            author_name: sanitize(detail.user.full_name()),
            username: sanitize(&detail.user.username),
            profile_url: text(detail.user.links.html.as_deref()),
            avatar_url: text(detail.user.profile_image.medium.as_deref()),
            portfolio_url: text(detail.user.portfolio_url()),
            social_links: detail
                .user
                .social_links()
                .into_iter()
                .map(|link| SocialLink {
                    handle: sanitize(&link.handle),
                    url: sanitize(&link.url),
                    ..link
                })
                .collect(),
            tags: detail.tag_titles().into_iter().map(sanitize).collect(),
            downloads: format_count(detail.download_count()),
            likes: format_count(detail.like_count()),
            download_url: text(detail.links.download.as_deref()),
            published: detail.published_ago(chrono::Utc::now()),
        }
    }

    /// Rows left for the grid after subtracting the chrome.
    ///
    /// Header (1), border (1), search box (3), footer with border (2), and the
    /// query heading (2) when a query is set.
    const fn calculate_available_rows(&self, total_rows: usize, has_heading: bool) -> usize {
        let chrome = if has_heading { 9 } else { 7 };
        total_rows.saturating_sub(chrome)
    }
}

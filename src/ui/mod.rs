//! User interface rendering layer with component-based architecture.
//!
//! This module transforms view models into ANSI-styled frames through
//! composable rendering components, with theme support and a responsive grid.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, truncation, counters)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, CLEAR_SCREEN};
pub use theme::Theme;
pub use viewmodel::{
    ClearControl, DetailView, DialogView, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    TileItem, UIViewModel,
};

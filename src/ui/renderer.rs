//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers, which
//!    append to one frame buffer
//!
//! # Example
//!
//! ```rust
//! use photogrid::app::AppState;
//! use photogrid::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("No results found"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// ANSI sequence clearing the screen and homing the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the UI for a terminal of `rows` by `cols` into an ANSI string.
///
/// Does not clear the screen; prefix [`CLEAR_SCREEN`] when redrawing.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    components::render_layout(&mut out, vm, theme, rows, cols);
    out
}

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer expirations, and fetch responses, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front end, the debounce timer, or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for the controller to execute
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`
//! - **Input**: `QueryChanged`, `ClearQuery`, `SelectImage`, `CloseDialog`
//! - **Timer**: `DebounceElapsed`
//! - **Worker**: `Fetched` with typed response variants
//!
//! # Example
//!
//! ```rust
//! use photogrid::app::{handle_event, Action, AppState, Event};
//! use photogrid::ui::Theme;
//! use photogrid::worker::FetchRequest;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Mounted);
//! assert!(render);
//! assert_eq!(actions, vec![Action::Fetch(FetchRequest::LoadAll)]);
//! ```

use crate::app::{Action, AppState, SelectionState};
use crate::worker::{FetchRequest, FetchResponse};

/// Events triggered by user input, timers, or fetch responses.
///
/// Events are processed one at a time on the controller's event loop, so
/// state transitions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view was mounted. Loads the unfiltered feed.
    Mounted,

    /// The search text changed to the given value.
    QueryChanged(String),

    /// The user pressed the clear-search control.
    ClearQuery,

    /// A quiet-period timer elapsed.
    DebounceElapsed {
        /// Query captured when the timer was scheduled.
        query: String,
        /// Token captured when the timer was scheduled.
        token: u64,
    },

    /// The user picked a tile.
    SelectImage {
        /// Identifier of the picked photo.
        id: String,
    },

    /// The user dismissed the detail dialog.
    CloseDialog,

    /// Wraps a response from the fetch worker.
    Fetched(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(render, actions)`: whether the view changed, and the side effects to run
/// in order. Errors carried by fetch responses are logged and swallowed here;
/// they never reach the user.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for diagnostics.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mounted => {
            state.consume_first_query_effect();
            tracing::debug!("mounted, loading feed");
            (true, vec![Action::Fetch(FetchRequest::LoadAll)])
        }
        Event::QueryChanged(query) => {
            state.query.clone_from(query);
            (true, run_query_effect(state))
        }
        Event::ClearQuery => {
            if state.is_loading() {
                tracing::debug!("search in flight, ignoring clear");
                return (false, vec![]);
            }
            state.query.clear();
            (true, run_query_effect(state))
        }
        Event::DebounceElapsed { query, token } => {
            if !state.take_pending_search(*token) {
                tracing::trace!(token, "superseded debounce timer, ignoring");
                return (false, vec![]);
            }
            state.begin_search();
            tracing::debug!(query = %query, in_flight = state.searches_in_flight(), "starting search");
            (
                true,
                vec![Action::Fetch(FetchRequest::Search { query: query.clone() })],
            )
        }
        Event::SelectImage { id } => {
            tracing::debug!(image_id = %id, "opening detail");
            state.selection = SelectionState::OpenPending { id: id.clone() };
            (true, vec![Action::Fetch(FetchRequest::Detail { id: id.clone() })])
        }
        Event::CloseDialog => {
            if state.selection.is_open() {
                state.selection = SelectionState::Closed;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::Fetched(response) => handle_response(state, response),
    }
}

/// Runs the query effect for the current query text.
///
/// The first invocation for a state is skipped; the mount path loads the
/// feed instead.
fn run_query_effect(state: &mut AppState) -> Vec<Action> {
    if state.consume_first_query_effect() {
        tracing::trace!("skipping first query effect");
        return vec![];
    }

    if state.query.is_empty() {
        state.cancel_pending_search();
        return vec![
            Action::CancelScheduledSearch,
            Action::Fetch(FetchRequest::LoadAll),
        ];
    }

    let token = state.schedule_search();
    tracing::trace!(query = %state.query, token, "search scheduled");
    vec![Action::ScheduleSearch {
        query: state.query.clone(),
        token,
    }]
}

fn handle_response(state: &mut AppState, response: &FetchResponse) -> (bool, Vec<Action>) {
    match response {
        FetchResponse::ImagesLoaded { images } => {
            tracing::debug!(count = images.len(), "feed loaded");
            state.images.clone_from(images);
            (true, vec![])
        }
        FetchResponse::LoadAllFailed { message } => {
            tracing::warn!(error = %message, "failed to load feed");
            (false, vec![])
        }
        FetchResponse::SearchCompleted { query, images } => {
            state.finish_search();
            tracing::debug!(query = %query, count = images.len(), "search completed");
            state.images.clone_from(images);
            (true, vec![])
        }
        FetchResponse::SearchFailed { query, message } => {
            state.finish_search();
            tracing::warn!(query = %query, error = %message, "search failed");
            (true, vec![])
        }
        FetchResponse::DetailLoaded { detail } => {
            if state.selection.is_pending_for(&detail.id) {
                state.selection = SelectionState::OpenReady(detail.clone());
                (true, vec![])
            } else {
                tracing::debug!(image_id = %detail.id, "detail no longer selected, dropping");
                (false, vec![])
            }
        }
        FetchResponse::DetailFailed { id, message } => {
            tracing::warn!(image_id = %id, error = %message, "failed to load detail");
            (false, vec![])
        }
    }
}

//! Controller runtime executing actions produced by the event handler.
//!
//! [`FeedController`] owns the [`AppState`], the debounce timer, and the
//! fetch worker. Front-end calls, timer expirations, and fetch responses are
//! all turned into [`Event`]s and applied on the task that drives the
//! controller, so the state is never touched concurrently.
//!
//! ```text
//! set_query ─┐                     ┌─ ScheduleSearch ─▶ Debouncer ──┐
//!            ├─▶ handle_event ─▶ ──┤                                 │
//! Fetched  ──┘        ▲            └─ Fetch ─▶ FetchWorker ──┐       │
//!                     │                                       ▼       ▼
//!                     └──────────────── event channel ◀──────────────┘
//! ```

pub mod debounce;

pub use debounce::Debouncer;

use crate::app::{handle_event, Action, AppState, Event};
use crate::service::PhotoService;
use crate::worker::FetchWorker;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Default quiet period before a typed query is searched.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Image Feed Controller and Detail Fetcher.
///
/// Every public operation returns `true` when the view needs re-rendering.
/// Asynchronous results arrive later on the event channel; drive them with
/// [`process_next`](Self::process_next) or [`next_event`](Self::next_event)
/// plus [`dispatch`](Self::dispatch).
#[derive(Debug)]
pub struct FeedController {
    state: AppState,
    worker: FetchWorker,
    debouncer: Debouncer,
    events_tx: UnboundedSender<Event>,
    events_rx: UnboundedReceiver<Event>,
}

impl FeedController {
    /// Creates a controller. Must be called within a tokio runtime.
    #[must_use]
    pub fn new(service: Arc<dyn PhotoService>, state: AppState, quiet_period: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state,
            worker: FetchWorker::new(service),
            debouncer: Debouncer::new(quiet_period),
            events_tx,
            events_rx,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Identifier of the photo at 1-based grid position `position`.
    #[must_use]
    pub fn image_id_at(&self, position: usize) -> Option<&str> {
        self.state.image_id_at(position)
    }

    /// Loads the unfiltered feed. Call once when the view first appears.
    pub fn mount(&mut self) -> bool {
        self.dispatch(Event::Mounted)
    }

    /// Replaces the query and runs the debounce protocol.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(Event::QueryChanged(text.into()))
    }

    /// Resets the query unless a search is in flight.
    pub fn clear_query(&mut self) -> bool {
        self.dispatch(Event::ClearQuery)
    }

    /// Opens the detail dialog for `id` and fetches its record.
    pub fn select_image(&mut self, id: impl Into<String>) -> bool {
        self.dispatch(Event::SelectImage { id: id.into() })
    }

    pub fn close_dialog(&mut self) -> bool {
        self.dispatch(Event::CloseDialog)
    }

    /// Applies `event` to the state and executes the resulting actions.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event);
        for action in actions {
            self.execute(action);
        }
        render
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::Fetch(request) => {
                // Detached: in-flight requests are never aborted.
                drop(self.worker.spawn(request, self.events_tx.clone()));
            }
            Action::ScheduleSearch { query, token } => {
                self.debouncer
                    .schedule(Event::DebounceElapsed { query, token }, self.events_tx.clone());
            }
            Action::CancelScheduledSearch => self.debouncer.cancel(),
        }
    }

    /// Waits for the next timer expiration or fetch response.
    ///
    /// The controller holds a sender, so this only returns `None` if the
    /// channel was closed externally.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.events_rx.recv().await
    }

    /// Waits for the next asynchronous event and applies it.
    ///
    /// Returns whether the view needs re-rendering.
    pub async fn process_next(&mut self) -> bool {
        match self.next_event().await {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    /// Applies every event already queued without waiting.
    ///
    /// Returns whether any of them requires a re-render.
    pub fn process_ready(&mut self) -> bool {
        let mut render = false;
        while let Ok(event) = self.events_rx.try_recv() {
            render |= self.dispatch(event);
        }
        render
    }

    /// Cancels the pending debounce timer. In-flight fetches run to
    /// completion and their responses are discarded with the controller.
    pub fn shutdown(&mut self) {
        tracing::debug!("controller shutting down");
        self.debouncer.cancel();
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        self.debouncer.cancel();
    }
}

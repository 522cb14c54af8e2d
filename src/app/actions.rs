//! Actions representing side effects to be executed by the controller.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) and returns a
//! `Vec<Action>`. Actions are the boundary between the pure state machine and
//! the effectful runtime: timers and network calls. The
//! [`FeedController`](crate::runtime::FeedController) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use photogrid::app::Action;
//! use photogrid::worker::FetchRequest;
//!
//! let actions = vec![
//!     Action::CancelScheduledSearch,
//!     Action::Fetch(FetchRequest::LoadAll),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::FetchRequest;

/// Commands representing side effects to be executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a Photo Service call on the fetch worker.
    ///
    /// The response comes back as [`Event::Fetched`](crate::app::Event::Fetched).
    Fetch(FetchRequest),

    /// Starts the quiet-period timer for a search.
    ///
    /// Replaces any timer already running. When the timer elapses the runtime
    /// posts [`Event::DebounceElapsed`](crate::app::Event::DebounceElapsed)
    /// carrying the same `query` and `token`.
    ScheduleSearch {
        /// Query to search once the input has been quiet.
        query: String,
        /// Token identifying this schedule.
        token: u64,
    },

    /// Discards the running quiet-period timer, if any, before it fires.
    CancelScheduledSearch,
}

//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic, sitting between the
//! controller runtime and the domain/worker layers. Everything here is pure:
//! no timers, no network, no I/O.
//!
//! # Architecture
//!
//! ```text
//! Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                      ↑                                 ↓
//!                      └── Timer expirations, Fetch responses ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Detail dialog state machine
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::SelectionState;
pub use state::AppState;

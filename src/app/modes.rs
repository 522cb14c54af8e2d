//! Selection state machine for the detail dialog.
//!
//! The dialog moves through three states:
//!
//! ```text
//!            select_image(id)            detail for id arrives
//! Closed ───────────────────▶ OpenPending ───────────────────▶ OpenReady
//!   ▲                           │    ▲                             │
//!   │        close_dialog       │    │   select_image(other id)    │
//!   └───────────────────────────┴────┴─────────────────────────────┘
//! ```
//!
//! A failed detail fetch leaves the dialog in `OpenPending`; the placeholder
//! stays up until the user closes the dialog.

use crate::domain::ImageDetail;

/// Current state of the detail dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No dialog; no detail record held.
    #[default]
    Closed,

    /// Dialog visible with a placeholder while the detail for `id` loads.
    OpenPending {
        /// Identifier of the photo being fetched.
        id: String,
    },

    /// Dialog visible with the fetched record.
    OpenReady(Box<ImageDetail>),
}

impl SelectionState {
    /// Returns `true` unless the dialog is closed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Identifier of the selected photo, pending or ready.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::OpenPending { id } => Some(id),
            Self::OpenReady(detail) => Some(&detail.id),
        }
    }

    /// Returns `true` if a detail for `id` is currently awaited.
    #[must_use]
    pub fn is_pending_for(&self, id: &str) -> bool {
        matches!(self, Self::OpenPending { id: pending } if pending == id)
    }

    /// The fetched detail, when ready.
    #[must_use]
    pub fn detail(&self) -> Option<&ImageDetail> {
        match self {
            Self::OpenReady(detail) => Some(detail),
            _ => None,
        }
    }
}

//! Fetch request and response types.
//!
//! This module defines the protocol between the controller and the fetch
//! worker. A [`FetchRequest`] names one Photo Service call; the worker always
//! answers with exactly one [`FetchResponse`], either a success carrying the
//! records or a failure carrying the error message.

use crate::domain::{ImageDetail, ImageSummary};

/// A single Photo Service call to run off the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Fetch the unfiltered feed.
    LoadAll,

    /// Fetch search results for `query`.
    Search {
        /// Query text, non-empty.
        query: String,
    },

    /// Fetch the full record for one photo.
    Detail {
        /// Photo identifier.
        id: String,
    },
}

impl FetchRequest {
    /// Builds the failure response matching this request.
    ///
    /// Used by the worker for service errors and for tasks that died before
    /// answering, so every request is answered exactly once.
    #[must_use]
    pub fn failed(&self, message: impl Into<String>) -> FetchResponse {
        let message = message.into();
        match self {
            Self::LoadAll => FetchResponse::LoadAllFailed { message },
            Self::Search { query } => FetchResponse::SearchFailed {
                query: query.clone(),
                message,
            },
            Self::Detail { id } => FetchResponse::DetailFailed {
                id: id.clone(),
                message,
            },
        }
    }

    /// Short name used as a span field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadAll => "load_all",
            Self::Search { .. } => "search",
            Self::Detail { .. } => "detail",
        }
    }
}

/// Outcome of a [`FetchRequest`], delivered back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    /// The unfiltered feed was fetched.
    ImagesLoaded {
        /// Feed in service order.
        images: Vec<ImageSummary>,
    },

    /// The unfiltered feed could not be fetched.
    LoadAllFailed {
        /// Human-readable error message.
        message: String,
    },

    /// A search completed. `images` may be empty.
    SearchCompleted {
        /// Query the results belong to.
        query: String,
        /// Matching photos in service order.
        images: Vec<ImageSummary>,
    },

    /// A search failed.
    SearchFailed {
        /// Query that failed.
        query: String,
        /// Human-readable error message.
        message: String,
    },

    /// A photo detail was fetched.
    DetailLoaded {
        /// The full record.
        detail: Box<ImageDetail>,
    },

    /// A photo detail could not be fetched.
    DetailFailed {
        /// Identifier that was requested.
        id: String,
        /// Human-readable error message.
        message: String,
    },
}

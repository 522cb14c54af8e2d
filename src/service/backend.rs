//! Photo Service abstraction.
//!
//! This module defines the [`PhotoService`] trait, the contract the controller
//! relies on to fetch photos. It maps one method to each endpoint of the
//! remote API so the event loop can be driven by the HTTP client in
//! production and by scripted services in tests.

use crate::domain::error::Result;
use crate::domain::{ImageDetail, ImageSummary};
use futures_util::future::BoxFuture;

/// Abstraction over the remote photo API.
///
/// Methods return boxed `Send` futures so that calls can be moved onto
/// spawned tasks without blocking the event loop.
///
/// # Implementations
///
/// - [`HttpPhotoService`](crate::service::HttpPhotoService): `reqwest` client
///   for Unsplash-compatible APIs
pub trait PhotoService: Send + Sync {
    /// Fetches the unfiltered feed (`GET /photos`).
    ///
    /// # Errors
    ///
    /// Returns a request failure if the call does not complete, the service
    /// answers with a non-2xx status, or the payload is malformed.
    fn list_photos(&self) -> BoxFuture<'_, Result<Vec<ImageSummary>>>;

    /// Fetches a single photo record (`GET /photos/{id}`).
    ///
    /// # Errors
    ///
    /// Returns a request failure, including a `Status` error for unknown ids.
    fn get_photo<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<ImageDetail>>;

    /// Searches photos (`GET /search/photos?query=<text>`), returning the
    /// `results` array of the envelope.
    ///
    /// # Errors
    ///
    /// Returns a request failure if the call does not complete or decode.
    fn search_photos<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<ImageSummary>>>;
}

//! Photo Service layer.
//!
//! - [`backend`]: the [`PhotoService`] trait, one method per API endpoint
//! - [`http`]: [`HttpPhotoService`], the `reqwest` implementation

pub mod backend;
pub mod http;

pub use backend::PhotoService;
pub use http::HttpPhotoService;

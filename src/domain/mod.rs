//! Domain layer for photogrid.
//!
//! This module contains the core record types and the error type, independent
//! of the HTTP client, the event loop, and the renderer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`photo`]: Summary and detail records returned by the Photo Service

pub mod error;
pub mod photo;

pub use error::{PhotoGridError, Result};
pub use photo::{
    ImageDetail, ImageSummary, PhotoLinks, PhotoUrls, ProfileImage, SearchResults, SocialHandles,
    SocialLink, SocialNetwork, Tag, User, UserLinks,
};

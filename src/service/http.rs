//! HTTP implementation of the Photo Service.
//!
//! [`HttpPhotoService`] talks to an Unsplash-compatible REST API with
//! `reqwest`. Every response goes through the same pipeline:
//!
//! 1. Send the request with the API version header and optional
//!    `Authorization: Client-ID` header
//! 2. Reject non-2xx statuses as [`PhotoGridError::Status`]
//! 3. Read the body as text and decode it with `serde_json`, so malformed
//!    payloads surface as [`PhotoGridError::Decode`]

use crate::domain::error::{PhotoGridError, Result};
use crate::domain::{ImageDetail, ImageSummary, SearchResults};
use crate::service::PhotoService;
use crate::Config;
use futures_util::future::BoxFuture;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// API version pinned on every request.
const ACCEPT_VERSION: &str = "v1";

/// `reqwest`-backed Photo Service client.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct HttpPhotoService {
    client: reqwest::Client,
    base_url: Url,
    access_key: Option<String>,
}

impl HttpPhotoService {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoGridError::Config`] if `base_url` is not an absolute
    /// http(s) URL, or [`PhotoGridError::Http`] if the client cannot be built.
    pub fn new(base_url: &str, access_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PhotoGridError::Config(format!("invalid api_base_url '{base_url}': {e}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(PhotoGridError::Config(format!(
                "api_base_url must be an http(s) URL, got '{base_url}'"
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("photogrid/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            access_key: access_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Creates a client from the `api_base_url` and `access_key` settings.
    ///
    /// # Errors
    ///
    /// See [`HttpPhotoService::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.access_key.clone())
    }

    /// Builds the URL for an endpoint from path segments.
    ///
    /// Segments are percent-encoded, so an id can never escape its path slot.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[tracing::instrument(level = "debug", skip(self, url, query), fields(url = %url))]
    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, &str)]) -> Result<T> {
        let mut request = self
            .client
            .get(url)
            .query(query)
            .header("Accept-Version", ACCEPT_VERSION);

        if let Some(key) = &self.access_key {
            let value = HeaderValue::from_str(&format!("Client-ID {key}"))
                .map_err(|e| PhotoGridError::Config(format!("invalid access_key: {e}")))?;
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "photo service returned error status");
            return Err(PhotoGridError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(body_len = body.len(), "photo service response received");
        Ok(serde_json::from_str(&body)?)
    }
}

impl PhotoService for HttpPhotoService {
    fn list_photos(&self) -> BoxFuture<'_, Result<Vec<ImageSummary>>> {
        Box::pin(async move { self.get_json(self.endpoint(&["photos"]), &[]).await })
    }

    fn get_photo<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<ImageDetail>> {
        Box::pin(async move { self.get_json(self.endpoint(&["photos", id]), &[]).await })
    }

    fn search_photos<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<ImageSummary>>> {
        Box::pin(async move {
            let envelope: SearchResults = self
                .get_json(self.endpoint(&["search", "photos"]), &[("query", query)])
                .await?;
            Ok(envelope.results)
        })
    }
}

//! Fetch worker running Photo Service calls off the event loop.
//!
//! The worker turns a [`FetchRequest`] into a [`FetchResponse`] by calling
//! the [`PhotoService`]. [`FetchWorker::spawn`] runs that on a tokio task and
//! posts the response back to the controller as an [`Event::Fetched`].
//!
//! Every spawned request is answered exactly once. If the service call
//! panics, the inner task's `JoinError` is converted into the matching
//! failure response, so state that waits for an answer (the loading flag) is
//! always released.

use crate::app::Event;
use crate::domain::error::Result;
use crate::service::PhotoService;
use crate::worker::{FetchRequest, FetchResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Executes fetch requests against a shared Photo Service.
#[derive(Clone)]
pub struct FetchWorker {
    service: Arc<dyn PhotoService>,
}

impl FetchWorker {
    #[must_use]
    pub fn new(service: Arc<dyn PhotoService>) -> Self {
        Self { service }
    }

    /// Helper for turning a service result into a response with consistent
    /// logging.
    fn handle_result<T, F>(request: &FetchRequest, result: Result<T>, on_success: F) -> FetchResponse
    where
        F: FnOnce(T) -> FetchResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(request = request.kind(), "photo service call succeeded");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(request = request.kind(), error = %e, "photo service call failed");
                request.failed(e.to_string())
            }
        }
    }

    /// Runs one request to completion and returns its response.
    pub async fn handle_request(&self, request: FetchRequest) -> FetchResponse {
        match &request {
            FetchRequest::LoadAll => {
                let result = self.service.list_photos().await;
                Self::handle_result(&request, result, |images| FetchResponse::ImagesLoaded { images })
            }
            FetchRequest::Search { query } => {
                let result = self.service.search_photos(query).await;
                Self::handle_result(&request, result, |images| FetchResponse::SearchCompleted {
                    query: query.clone(),
                    images,
                })
            }
            FetchRequest::Detail { id } => {
                let result = self.service.get_photo(id).await;
                Self::handle_result(&request, result, |detail| FetchResponse::DetailLoaded {
                    detail: Box::new(detail),
                })
            }
        }
    }

    /// Spawns `request` on a tokio task and sends the response to `events`.
    ///
    /// In-flight requests are never aborted; the returned handle is only
    /// useful for tests that want to await completion.
    pub fn spawn(&self, request: FetchRequest, events: UnboundedSender<Event>) -> JoinHandle<()> {
        let span = tracing::debug_span!("fetch", request = request.kind());
        let worker = self.clone();

        tokio::spawn(
            async move {
                let call = tokio::spawn({
                    let request = request.clone();
                    async move { worker.handle_request(request).await }
                        .in_current_span()
                });

                let response = match call.await {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::warn!(error = %e, "fetch task did not complete");
                        request.failed(format!("fetch task did not complete: {e}"))
                    }
                };

                if events.send(Event::Fetched(response)).is_err() {
                    tracing::debug!("event loop gone, dropping fetch response");
                }
            }
            .instrument(span),
        )
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ImageDetail, ImageSummary, PhotoGridError};
    use futures_util::future::BoxFuture;
    use tokio::sync::mpsc;

    struct OneShotService;

    impl PhotoService for OneShotService {
        fn list_photos(&self) -> BoxFuture<'_, Result<Vec<ImageSummary>>> {
            Box::pin(async {
                let image: ImageSummary = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
                Ok(vec![image])
            })
        }

        fn get_photo<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<ImageDetail>> {
            Box::pin(async move {
                Err::<ImageDetail, _>(PhotoGridError::Status {
                    status: 404,
                    url: format!("http://test/photos/{id}"),
                })
            })
        }

        fn search_photos<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<ImageSummary>>> {
            Box::pin(async move {
                if query == "panic" {
                    panic!("service exploded");
                }
                Ok::<Vec<ImageSummary>, PhotoGridError>(Vec::new())
            })
        }
    }

    fn worker() -> FetchWorker {
        FetchWorker::new(Arc::new(OneShotService))
    }

    #[tokio::test]
    async fn load_all_success_becomes_images_loaded() {
        let response = worker().handle_request(FetchRequest::LoadAll).await;
        match response {
            FetchResponse::ImagesLoaded { images } => assert_eq!(images[0].id, "a"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_error_becomes_detail_failed() {
        let response = worker()
            .handle_request(FetchRequest::Detail { id: "42".to_string() })
            .await;
        match response {
            FetchResponse::DetailFailed { id, message } => {
                assert_eq!(id, "42");
                assert!(message.contains("404"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn spawned_request_posts_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        worker()
            .spawn(FetchRequest::Search { query: "cat".to_string() }, tx)
            .await
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(Event::Fetched(FetchResponse::SearchCompleted {
                query: "cat".to_string(),
                images: Vec::new(),
            }))
        );
    }

    #[tokio::test]
    async fn panicking_service_still_answers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        worker()
            .spawn(FetchRequest::Search { query: "panic".to_string() }, tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(Event::Fetched(FetchResponse::SearchFailed { query, .. })) => assert_eq!(query, "panic"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

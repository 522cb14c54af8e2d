//! `HttpPhotoService` against a loopback HTTP server.

mod common;

use common::{ids, StubServer};
use photogrid::app::AppState;
use photogrid::{FeedController, HttpPhotoService, PhotoGridError, PhotoService, Theme};
use std::sync::Arc;
use std::time::Duration;

const FEED: &str = r#"[
    {"id": "a", "likes": 3, "user": {"username": "ann"}},
    {"id": "b", "likes": null, "alt_description": null, "user": {"username": "bob"}}
]"#;

const SEARCH: &str = r#"{"total": 1, "total_pages": 1, "results": [{"id": "s1", "user": {"username": "sam"}}]}"#;

const DETAIL: &str = r##"{
    "id": "42",
    "description": "Harbor at dusk",
    "color": "#0c2640",
    "downloads": 900,
    "likes": 12,
    "created_at": "2020-05-01T10:00:00Z",
    "user": {"username": "ann", "name": "Ann Lee", "social": {"instagram_username": "ann.lee"}},
    "tags": [{"title": "sea"}],
    "links": {"download": "https://dl.example/42"}
}"##;

fn routes(target: &str) -> (u16, String) {
    match target {
        "/photos" | "/api/photos" => (200, FEED.to_string()),
        "/photos/42" => (200, DETAIL.to_string()),
        "/photos/garbled" => (200, "<html>not json</html>".to_string()),
        t if t.starts_with("/search/photos?") => (200, SEARCH.to_string()),
        _ => (404, r#"{"errors": ["Couldn't find Photo"]}"#.to_string()),
    }
}

#[tokio::test]
async fn lists_photos() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();

    let images = service.list_photos().await.unwrap();
    assert_eq!(ids(&images), vec!["a", "b"]);
    assert_eq!(images[1].like_count(), 0);
}

#[tokio::test]
async fn search_sends_query_and_unwraps_results() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();

    let images = service.search_photos("red car").await.unwrap();
    assert_eq!(ids(&images), vec!["s1"]);

    let request = &server.requests()[0];
    assert!(request.starts_with("GET /search/photos?query=red+car "));
}

#[tokio::test]
async fn fetches_detail() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();

    let detail = service.get_photo("42").await.unwrap();
    assert_eq!(detail.id, "42");
    assert_eq!(detail.download_count(), 900);
    assert_eq!(detail.tag_titles(), vec!["sea"]);
    assert_eq!(detail.user.full_name(), "Ann Lee");
    assert!(detail.created_at.is_some());
}

#[tokio::test]
async fn unknown_id_is_status_error() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();

    let err = service.get_photo("missing").await.unwrap_err();
    match &err {
        PhotoGridError::Status { status, url } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with("/photos/missing"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.is_request_failure());
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();

    let err = service.get_photo("garbled").await.unwrap_err();
    assert!(matches!(err, PhotoGridError::Decode(_)));
}

#[tokio::test]
async fn sends_version_and_access_key_headers() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, Some("secret".to_string())).unwrap();

    service.list_photos().await.unwrap();

    let request = server.requests()[0].to_ascii_lowercase();
    assert!(request.contains("accept-version: v1"));
    assert!(request.contains("authorization: client-id secret"));
}

#[tokio::test]
async fn omits_authorization_without_key() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();

    service.list_photos().await.unwrap();

    let request = server.requests()[0].to_ascii_lowercase();
    assert!(!request.contains("authorization:"));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&format!("{}/api", server.base_url), None).unwrap();

    let images = service.list_photos().await.unwrap();
    assert_eq!(images.len(), 2);
    assert!(server.requests()[0].starts_with("GET /api/photos "));
}

#[tokio::test]
async fn unreachable_service_is_request_failure() {
    let service = HttpPhotoService::new("http://127.0.0.1:1", None).unwrap();

    let err = service.list_photos().await.unwrap_err();
    assert!(matches!(err, PhotoGridError::Http(_)));
    assert!(err.is_request_failure());
}

#[tokio::test]
async fn controller_mounts_over_http() {
    let server = StubServer::start(routes).await;
    let service = HttpPhotoService::new(&server.base_url, None).unwrap();
    let mut controller = FeedController::new(
        Arc::new(service),
        AppState::new(Theme::default()),
        Duration::from_millis(10),
    );

    controller.mount();
    assert!(controller.process_next().await);
    assert_eq!(ids(&controller.state().images), vec!["a", "b"]);

    controller.select_image("42");
    controller.process_next().await;
    let detail = controller.state().selection.detail().unwrap();
    assert_eq!(detail.display_description(), Some("Harbor at dusk"));
}

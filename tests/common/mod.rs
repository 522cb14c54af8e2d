//! Shared fixtures for integration tests.
//!
//! - [`ScriptedService`]: in-memory Photo Service with per-call delays,
//!   failures, and a call log
//! - [`StubServer`]: loopback HTTP responder for exercising the real client

#![allow(dead_code)]

use futures_util::future::BoxFuture;
use photogrid::{ImageDetail, ImageSummary, PhotoGridError, PhotoService, Result};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One recorded Photo Service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Search(String),
    Detail(String),
}

/// Photo Service answering from canned data.
#[derive(Debug, Default)]
pub struct ScriptedService {
    calls: Mutex<Vec<Call>>,
    feed: Vec<ImageSummary>,
    results: HashMap<String, Vec<ImageSummary>>,
    details: HashMap<String, ImageDetail>,
    delays: HashMap<String, Duration>,
    failing_searches: HashSet<String>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, feed: Vec<ImageSummary>) -> Self {
        self.feed = feed;
        self
    }

    pub fn with_results(mut self, query: &str, images: Vec<ImageSummary>) -> Self {
        self.results.insert(query.to_string(), images);
        self
    }

    pub fn with_detail(mut self, detail: ImageDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    /// Delays the search for `query`, or the detail for an id of the same text.
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn with_failing_search(mut self, query: &str) -> Self {
        self.failing_searches.insert(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn pause(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

impl PhotoService for ScriptedService {
    fn list_photos(&self) -> BoxFuture<'_, Result<Vec<ImageSummary>>> {
        Box::pin(async move {
            self.record(Call::List);
            Ok(self.feed.clone())
        })
    }

    fn get_photo<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<ImageDetail>> {
        Box::pin(async move {
            self.record(Call::Detail(id.to_string()));
            self.pause(id).await;
            self.details.get(id).cloned().ok_or_else(|| PhotoGridError::Status {
                status: 404,
                url: format!("http://stub/photos/{id}"),
            })
        })
    }

    fn search_photos<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<ImageSummary>>> {
        Box::pin(async move {
            self.record(Call::Search(query.to_string()));
            self.pause(query).await;
            if self.failing_searches.contains(query) {
                return Err(PhotoGridError::Status {
                    status: 500,
                    url: format!("http://stub/search/photos?query={query}"),
                });
            }
            Ok(self.results.get(query).cloned().unwrap_or_default())
        })
    }
}

pub fn summary(id: &str, username: &str) -> ImageSummary {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "likes": 10,
        "alt_description": format!("photo {id}"),
        "urls": { "small": format!("https://img.example/{id}/small") },
        "user": { "username": username, "first_name": username },
    }))
    .unwrap()
}

pub fn detail(id: &str) -> ImageDetail {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "description": format!("detail for {id}"),
        "likes": 5,
        "downloads": 100,
        "user": { "username": "ann", "name": "Ann Lee" },
        "tags": [{ "title": "sea" }],
    }))
    .unwrap()
}

pub fn ids(images: &[ImageSummary]) -> Vec<&str> {
    images.iter().map(|image| image.id.as_str()).collect()
}

/// Loopback HTTP/1.1 server answering every request with one closure.
///
/// Each connection serves a single request and closes.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Starts a server; `respond` maps the request target to status and body.
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        let respond = Arc::new(respond);

        let handle = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let log = Arc::clone(&log);
                let respond = Arc::clone(&respond);
                tokio::spawn(async move {
                    let mut head = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        let n = socket.read(&mut chunk).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        head.extend_from_slice(&chunk[..n]);
                        if head.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let head = String::from_utf8_lossy(&head).into_owned();
                    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let (status, body) = respond(&target);
                    log.lock().unwrap().push(head);

                    let response = format!(
                        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        reason(status),
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Raw request heads received so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

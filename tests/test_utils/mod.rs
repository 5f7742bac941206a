//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use tower::util::ServiceExt;

use wattsaver::ai::chat::ChatModel;
use wattsaver::ai::prompt::seed_transcript;
use wattsaver::api::{AppState, app};
use wattsaver::core::AppConfig;
use wattsaver::gemini::Content;
use wattsaver::sessions::{InMemorySessionStore, SessionRegistry};

/// Included in every failure so tests can check it never leaks
pub const UPSTREAM_ERROR_DETAIL: &str = "upstream exploded with secret-detail";

/// A `ChatModel` that records every history it is sent and can be
/// told to fail the next N calls.
#[derive(Default)]
pub struct FakeModel {
    calls: Mutex<Vec<Vec<Content>>>,
    failures: AtomicUsize,
}

impl FakeModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Vec<Content>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for FakeModel {
    async fn send(&self, history: &[Content]) -> Result<String, Error> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(history.to_vec());
            calls.len()
        };

        let should_fail = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |f| f.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(anyhow!(UPSTREAM_ERROR_DETAIL));
        }

        let last = history.last().map(|c| c.text()).unwrap_or_default();
        Ok(format!("Reply {} to: {}", n, last))
    }
}

pub struct TestApp {
    pub router: Router,
    pub sessions: SessionRegistry,
    pub model: Arc<FakeModel>,
}

/// Creates a test application backed by a `FakeModel` so nothing
/// leaves the process.
pub fn test_app() -> TestApp {
    let model = FakeModel::new();
    let sessions = SessionRegistry::new(
        Arc::new(InMemorySessionStore::new()),
        model.clone(),
        seed_transcript(),
    );
    let app_config = AppConfig {
        gemini_api_hostname: String::from("http://localhost:1"),
        gemini_api_key: String::from("test-api-key"),
        gemini_model: String::from("gemini-1.5-flash"),
        static_path: String::from("./web-ui/static"),
    };
    let router = app(AppState::new(sessions.clone(), app_config).unwrap());

    TestApp {
        router,
        sessions,
        model,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` pair of the session cookie set by a response
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session_id="))
        .and_then(|v| v.split(';').next())
        .map(String::from)
}

pub async fn post_chat(router: &Router, body: &str, cookie: Option<&str>) -> Response<Body> {
    let mut request = Request::builder()
        .uri("/chat")
        .method("POST")
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    router
        .clone()
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

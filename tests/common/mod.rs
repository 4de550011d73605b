#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use shortly::application::services::{LinkStore, Widget};
use shortly::infrastructure::clipboard::NullClipboard;
use shortly::infrastructure::shortener::ShrtcoClient;
use shortly::infrastructure::storage::MemoryStorage;
use shortly::infrastructure::view::RecordingView;
use tokio::net::TcpListener;

/// How the mock shortening service answers `GET /v2/shorten`.
#[derive(Clone)]
pub enum MockBehavior {
    /// 201 with `result.short_link` set to `short_link`
    ShortLink(&'static str),
    /// The given status with a shrtco-style error body
    Reject(StatusCode, &'static str),
    /// 200 with a body that lacks `result.short_link`
    MissingField,
    /// Sleeps before answering like `ShortLink`
    Slow(Duration, &'static str),
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    hits: Arc<AtomicUsize>,
    last_url: Arc<std::sync::Mutex<Option<String>>>,
}

/// Handle to a running mock service.
pub struct MockService {
    pub api_url: String,
    hits: Arc<AtomicUsize>,
    last_url: Arc<std::sync::Mutex<Option<String>>>,
}

impl MockService {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// The `url` query parameter of the most recent request.
    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

async fn shorten_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_url.lock().unwrap() = params.get("url").cloned();

    match state.behavior {
        MockBehavior::ShortLink(short_link) => ok_body(short_link),
        MockBehavior::Reject(status, message) => (
            status,
            Json(json!({ "ok": false, "error_code": 2, "error": message })),
        )
            .into_response(),
        MockBehavior::MissingField => {
            (StatusCode::OK, Json(json!({ "ok": true, "result": {} }))).into_response()
        }
        MockBehavior::Slow(delay, short_link) => {
            tokio::time::sleep(delay).await;
            ok_body(short_link)
        }
    }
}

fn ok_body(short_link: &str) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({ "ok": true, "result": { "short_link": short_link } })),
    )
        .into_response()
}

/// Starts the mock service on an ephemeral port.
pub async fn spawn_mock_service(behavior: MockBehavior) -> MockService {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_url = Arc::new(std::sync::Mutex::new(None));

    let state = MockState {
        behavior,
        hits: hits.clone(),
        last_url: last_url.clone(),
    };

    let app = Router::new()
        .route("/v2/shorten", get(shorten_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockService {
        api_url: format!("http://{addr}/v2/"),
        hits,
        last_url,
    }
}

/// An address nothing listens on.
pub async fn closed_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v2/")
}

pub type TestWidget = Widget<MemoryStorage, ShrtcoClient, RecordingView, NullClipboard>;

pub fn create_test_widget(api_url: &str) -> TestWidget {
    Widget::new(
        LinkStore::new(MemoryStorage::new()),
        Arc::new(ShrtcoClient::new(api_url)),
        Arc::new(RecordingView::new()),
        Arc::new(NullClipboard::new()),
    )
}

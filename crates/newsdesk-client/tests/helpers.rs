//! Stub news platform for client integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use newsdesk_auth::{MemoryTokenStore, TokenStore};
use newsdesk_client::{ApiClient, RetryPolicy};
use newsdesk_core::config::AppConfig;

/// A request as the stub saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Debug, Default)]
struct Inner {
    requests: Vec<RecordedRequest>,
    news_failures_remaining: u32,
}

/// Shared state of the stub server.
#[derive(Debug, Clone, Default)]
pub struct StubState {
    inner: Arc<Mutex<Inner>>,
}

impl StubState {
    fn record(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.inner.lock().unwrap().requests.push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization,
            body,
        });
    }

    /// Make the next `n` news-list requests fail with 503.
    pub fn fail_news_list(&self, n: u32) {
        self.inner.lock().unwrap().news_failures_remaining = n;
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// The most recent request to `path`.
    pub fn last_to(&self, path: &str) -> Option<RecordedRequest> {
        self.requests().into_iter().rev().find(|r| r.path == path)
    }

    /// Number of requests to `path`.
    pub fn count_to(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }
}

/// Mint an HS256 token with the given expiry.
pub fn mint_token(exp: i64) -> String {
    encode(
        &Header::default(),
        &json!({ "id": "emp-1", "role": "employee", "exp": exp }),
        &EncodingKey::from_secret(b"platform-secret"),
    )
    .unwrap()
}

/// A token valid for the next hour.
pub fn fresh_token() -> String {
    mint_token(chrono::Utc::now().timestamp() + 3_600)
}

/// A token that expired an hour ago.
pub fn stale_token() -> String {
    mint_token(chrono::Utc::now().timestamp() - 3_600)
}

pub fn news_record(id: &str, heading: &str, category: &str) -> Value {
    json!({
        "_id": id,
        "heading": heading,
        "subheading": format!("{heading} summary"),
        "content": "<p>Body</p>",
        "category": category,
        "employeeName": "Asha",
        "publishedDate": "2024-05-01T09:00:00Z",
        "views": 5
    })
}

async fn employee_login(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(method, &uri, &headers, body.clone());
    if body["password"] != "Correct1" {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))).into_response();
    }
    Json(json!({
        "token": fresh_token(),
        "user": { "id": "emp-1", "email": body["email"], "name": "Asha" }
    }))
    .into_response()
}

async fn admin_login(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(method, &uri, &headers, body.clone());
    Json(json!({ "user": { "id": "adm-1", "email": body["email"], "name": "Root" } })).into_response()
}

async fn employee_logout(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(method, &uri, &headers, Value::Null);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "logout exploded" }))).into_response()
}

async fn acknowledge(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(method, &uri, &headers, serde_json::from_slice(&body).unwrap_or(Value::Null));
    Json(json!({ "message": "ok" })).into_response()
}

async fn list_news(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(method, &uri, &headers, Value::Null);
    {
        let mut inner = state.inner.lock().unwrap();
        if inner.news_failures_remaining > 0 {
            inner.news_failures_remaining -= 1;
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    }
    Json(json!({
        "news": [
            news_record("n1", "Harbour expansion approved", "Business"),
            news_record("n2", "Cup final tonight", "Sports"),
        ],
        "totalPages": 4
    }))
    .into_response()
}

async fn news_item(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    state.record(method.clone(), &uri, &headers, serde_json::from_slice(&body).unwrap_or(Value::Null));
    if method == Method::DELETE {
        return Json(json!({ "message": "Deleted" })).into_response();
    }
    if method == Method::PUT {
        return Json(json!({ "message": "Updated" })).into_response();
    }
    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "News not found" }))).into_response();
    }
    Json(news_record(&id, "Single story", "Health")).into_response()
}

async fn record_view(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(method, &uri, &headers, Value::Null);
    Json(json!({ "views": 43 })).into_response()
}

async fn by_category(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(category): Path<String>,
) -> Response {
    state.record(method, &uri, &headers, Value::Null);
    Json(json!({ "news": [news_record("r1", "Related story", &category)] })).into_response()
}

async fn my_news(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let authorized = headers.contains_key("authorization");
    state.record(method, &uri, &headers, Value::Null);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "No token provided" }))).into_response();
    }
    Json(json!({
        "news": [news_record("m1", "My first story", "Politics")],
        "totalPages": 3,
        "totalItems": 21
    }))
    .into_response()
}

async fn register_user(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(method, &uri, &headers, body.clone());
    if body["email"] == "taken@desk.io" {
        return Json(json!({ "message": "Already exists" })).into_response();
    }
    (StatusCode::CREATED, Json(json!({ "message": "User registered" }))).into_response()
}

/// A running stub server.
pub struct StubServer {
    pub base_url: String,
    pub state: StubState,
}

impl StubServer {
    /// Bind on an ephemeral port and serve in the background.
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new()
            .route("/api/auth/v1/login", post(employee_login))
            .route("/api/login_user", post(admin_login))
            .route("/api/auth/v1/logout", post(employee_logout))
            .route("/api/auth/logout", post(acknowledge))
            .route("/api/auth/v1/change-password", post(acknowledge))
            .route("/api/news", get(list_news).post(acknowledge))
            .route("/api/news/mine", get(my_news))
            .route("/api/news/category/{category}", get(by_category))
            .route("/api/news/{id}", get(news_item).put(news_item).delete(news_item))
            .route("/api/news/{id}/view", post(record_view))
            .route("/api/register_user", post(register_user))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    /// Client pointed at this server with an in-memory token store.
    pub fn client(&self, tokens: Arc<MemoryTokenStore>) -> ApiClient {
        let mut config = AppConfig::default();
        config.api.base_url = self.base_url.clone();
        config.api.timeout_seconds = 5;
        let store: Arc<dyn TokenStore> = tokens;
        ApiClient::new(&config, store).unwrap().with_retry(RetryPolicy {
            max_retries: 2,
            delay: std::time::Duration::from_millis(5),
        })
    }
}

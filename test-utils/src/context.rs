use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Path of the mock OAuth client-credentials token endpoint.
pub const TOKEN_PATH: &str = "/oauth/token";

/// Behavior of the mock token endpoint.
#[derive(Clone, Debug)]
pub struct TokenBehavior {
    pub(crate) expires_in: u64,
    pub(crate) delay: Option<Duration>,
    pub(crate) status: StatusCode,
}

/// A canned JSON response.
#[derive(Clone, Debug)]
pub(crate) struct MockResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Value,
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Responses registered for one path.
#[derive(Clone, Debug)]
pub(crate) enum MockRoute {
    Single(MockResponse),
    Paged(Vec<MockResponse>),
}

/// A request received by the mock server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Request headers with lowercase names.
    pub headers: HashMap<String, String>,
    /// Raw request body.
    pub body: String,
}

impl RecordedRequest {
    fn new(method: &Method, uri: &Uri, headers: &HeaderMap, body: String) -> Self {
        Self {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            headers: headers
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_lowercase(), v.to_string()))
                })
                .collect(),
            body,
        }
    }

    /// Returns a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Returns a query parameter value. Values are returned as sent, without percent-decoding.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
    }

    /// Parses the request body as JSON.
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

struct MockState {
    token: TokenBehavior,
    routes: HashMap<String, MockRoute>,
    token_requests: AtomicUsize,
    token_log: Mutex<Vec<RecordedRequest>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running mock upstream server.
///
/// Holds the base URL of the server and the shared state used to inspect what the code
/// under test sent. The server task is aborted when the context is dropped.
pub struct TestContext {
    /// Base URL of the mock server, e.g. `http://127.0.0.1:40123`.
    pub base_url: String,

    state: Arc<MockState>,
    server: JoinHandle<()>,
}

impl TestContext {
    pub(crate) async fn start(
        token: TokenBehavior,
        routes: HashMap<String, MockRoute>,
    ) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let state = Arc::new(MockState {
            token,
            routes,
            token_requests: AtomicUsize::new(0),
            token_log: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(TOKEN_PATH, post(token_handler))
            .fallback(route_handler)
            .with_state(state.clone());

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
            server,
        })
    }

    /// Builds an absolute URL on the mock server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of the mock OAuth token endpoint.
    pub fn token_url(&self) -> String {
        self.url(TOKEN_PATH)
    }

    /// Number of requests the token endpoint has received.
    pub fn token_requests(&self) -> usize {
        self.state.token_requests.load(Ordering::SeqCst)
    }

    /// Requests received by the token endpoint, in arrival order.
    pub fn token_request_log(&self) -> Vec<RecordedRequest> {
        self.state.token_log.lock().unwrap().clone()
    }

    /// All non-token requests, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Non-token requests for one path, in arrival order.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn token_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let issued = state.token_requests.fetch_add(1, Ordering::SeqCst) + 1;
    state
        .token_log
        .lock()
        .unwrap()
        .push(RecordedRequest::new(&method, &uri, &headers, body));

    if let Some(delay) = state.token.delay {
        tokio::time::sleep(delay).await;
    }

    if state.token.status != StatusCode::OK {
        return (
            state.token.status,
            Json(json!({
                "error": "invalid_client",
                "error_description": "Invalid client credentials"
            })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": format!("token-{}", issued),
        "token_type": "bearer",
        "expires_in": state.token.expires_in
    }))
    .into_response()
}

async fn route_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let request = RecordedRequest::new(&method, &uri, &headers, body);
    let page = request
        .header("page")
        .and_then(|page| page.parse::<usize>().ok())
        .unwrap_or(1);
    state.requests.lock().unwrap().push(request);

    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "type": "BLZWEBAPI00000404", "detail": "Not Found" })),
        )
            .into_response()
    };

    match state.routes.get(uri.path()) {
        Some(MockRoute::Single(response)) => response.clone().into_response(),
        Some(MockRoute::Paged(pages)) => pages
            .get(page.saturating_sub(1))
            .cloned()
            .map(IntoResponse::into_response)
            .unwrap_or_else(not_found),
        None => not_found(),
    }
}

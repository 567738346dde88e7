use axum::http::StatusCode;
use serde_json::Value;
use std::{collections::HashMap, time::Duration};

use crate::{
    context::{MockResponse, MockRoute, TestContext, TokenBehavior},
    error::TestError,
};

/// Builder for creating test contexts with canned upstream responses.
///
/// Provides a fluent interface for configuring the mock upstream server. Routes are matched
/// on the exact request path (query strings are ignored, but recorded). The OAuth token
/// endpoint is always available at [`crate::context::TOKEN_PATH`].
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_token_expires_in(3600)
///     .with_json("/data/wow/media/item/19019", fixture::blizzard::item_media(19019))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Behavior of the OAuth client-credentials token endpoint.
    token: TokenBehavior,

    /// Canned responses keyed by request path.
    routes: HashMap<String, MockRoute>,
}

impl TestBuilder {
    /// Creates a new test builder with a working token endpoint and no routes.
    ///
    /// Defaults:
    /// - token `expires_in`: 3600 seconds
    /// - token delay: none
    /// - token status: 200 OK
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            token: TokenBehavior {
                expires_in: 3600,
                delay: None,
                status: StatusCode::OK,
            },
            routes: HashMap::new(),
        }
    }

    /// Sets the `expires_in` value returned by the token endpoint.
    ///
    /// # Arguments
    /// - `seconds` - Lifetime of issued tokens in seconds
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_token_expires_in(mut self, seconds: u64) -> Self {
        self.token.expires_in = seconds;
        self
    }

    /// Delays every token response, widening the window in which concurrent callers
    /// observe an in-flight refresh.
    ///
    /// # Arguments
    /// - `delay` - Time to wait before answering a token request
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_token_delay(mut self, delay: Duration) -> Self {
        self.token.delay = Some(delay);
        self
    }

    /// Makes the token endpoint reject every request with 401 `invalid_client`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_failing_token(mut self) -> Self {
        self.token.status = StatusCode::UNAUTHORIZED;
        self
    }

    /// Registers a 200 OK JSON response for a path.
    ///
    /// # Arguments
    /// - `path` - Exact request path, e.g. `/data/wow/guild/realm/name`
    /// - `body` - JSON body to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_json(self, path: impl Into<String>, body: Value) -> Self {
        self.with_status(path, StatusCode::OK, body)
    }

    /// Registers a JSON response with an explicit status code for a path.
    ///
    /// # Arguments
    /// - `path` - Exact request path
    /// - `status` - Status code to answer with
    /// - `body` - JSON body to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status(mut self, path: impl Into<String>, status: StatusCode, body: Value) -> Self {
        self.routes.insert(
            path.into(),
            MockRoute::Single(MockResponse { status, body }),
        );
        self
    }

    /// Registers a paginated response for a path.
    ///
    /// The page is selected by the 1-based `Page` request header (missing header means page 1),
    /// matching how Raid-Helper paginates its events list.
    ///
    /// # Arguments
    /// - `path` - Exact request path
    /// - `pages` - JSON bodies, one per page in order
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_paged_json(mut self, path: impl Into<String>, pages: Vec<Value>) -> Self {
        let pages = pages
            .into_iter()
            .map(|body| MockResponse {
                status: StatusCode::OK,
                body,
            })
            .collect();
        self.routes.insert(path.into(), MockRoute::Paged(pages));
        self
    }

    /// Starts the mock upstream server with the configured behavior.
    ///
    /// Binds an ephemeral port on `127.0.0.1` and serves the mock in a background task that
    /// is aborted when the returned context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock server
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::start(self.token, self.routes).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

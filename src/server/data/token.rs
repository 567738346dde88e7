//! OAuth client-credentials token cache.
//!
//! One `TokenCache` belongs to one upstream client. It hands out a cached bearer token while
//! it is valid and otherwise performs a client-credentials exchange. Concurrent callers that
//! arrive while an exchange is running attach to that same exchange, so at most one token
//! request per cache is ever outstanding.

use dioxus_logger::tracing;
use futures::future::{BoxFuture, FutureExt, Shared};
use oauth2::{basic::BasicClient, ClientId, ClientSecret, TokenResponse, TokenUrl};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::server::{
    config::{ClientCredentials, ServiceCredentials},
    error::{
        config::ConfigError,
        upstream::{Upstream, UpstreamError},
        AppError,
    },
};

/// Tokens are treated as expired this long before the upstream says they are.
pub const EXPIRY_SKEW: Duration = Duration::from_secs(60);

/// Lifetime assumed when a token response omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// A bearer token and the instant after which it must no longer be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: Instant,
}

impl AccessToken {
    /// Creates a token issued at `issued_at` with the upstream-reported lifetime.
    ///
    /// The expiry skew is subtracted once here, so a token whose lifetime is not longer than
    /// the skew is stale immediately.
    pub fn issued(value: String, issued_at: Instant, expires_in: Duration) -> Self {
        Self {
            value,
            expires_at: issued_at + expires_in.saturating_sub(EXPIRY_SKEW),
        }
    }

    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

type PendingRefresh = Shared<BoxFuture<'static, Result<AccessToken, UpstreamError>>>;

enum TokenState {
    Idle,
    Valid(AccessToken),
    Refreshing(PendingRefresh),
}

/// Memoized client-credentials token for one upstream client.
///
/// Cheap to clone; clones share the same cached token and in-flight refresh.
#[derive(Clone)]
pub struct TokenCache {
    service: Upstream,
    credentials: ServiceCredentials,
    token_url: TokenUrl,
    http_client: reqwest::Client,
    state: Arc<Mutex<TokenState>>,
}

impl TokenCache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// - `service` - Upstream the tokens are for, used in errors and logs
    /// - `credentials` - Client id/secret; missing halves are reported on first use
    /// - `token_url` - OAuth token endpoint
    /// - `http_client` - Client used for the exchange; must not follow redirects
    ///
    /// # Returns
    /// - `Ok(TokenCache)` - Empty cache
    /// - `Err(ConfigError::InvalidEnvVar)` - `token_url` is not a valid URL
    pub fn new(
        service: Upstream,
        credentials: ServiceCredentials,
        token_url: &str,
        http_client: reqwest::Client,
    ) -> Result<Self, ConfigError> {
        let token_url =
            TokenUrl::new(token_url.to_string()).map_err(|e| ConfigError::InvalidEnvVar {
                name: format!("{} token URL", service),
                value: token_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            service,
            credentials,
            token_url,
            http_client,
            state: Arc::new(Mutex::new(TokenState::Idle)),
        })
    }

    /// Returns a valid bearer token, refreshing it if needed.
    ///
    /// Missing credentials fail before any network call. When a refresh is already running
    /// the caller waits for that refresh instead of starting another; every waiter observes
    /// the same token or the same error. A failed refresh leaves the cache empty so the next
    /// call tries again.
    ///
    /// # Returns
    /// - `Ok(String)` - Bearer token value
    /// - `Err(AppError::ConfigErr)` - Client id or secret is not configured
    /// - `Err(AppError::UpstreamErr(UpstreamError::Token))` - The exchange failed
    pub async fn get_token(&self) -> Result<String, AppError> {
        let credentials = self.credentials.require()?;

        let pending = {
            let mut state = self.state.lock().await;
            match &*state {
                TokenState::Valid(token) if token.is_valid_at(Instant::now()) => {
                    return Ok(token.value.clone());
                }
                TokenState::Refreshing(pending) => pending.clone(),
                TokenState::Idle | TokenState::Valid(_) => {
                    tracing::debug!("Refreshing {} access token", self.service);
                    let pending = self.start_refresh(credentials);
                    *state = TokenState::Refreshing(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;
        self.settle(&pending, &outcome).await;

        Ok(outcome?.value)
    }

    /// Stores a token, replacing whatever the cache held.
    pub async fn set(&self, token: AccessToken) {
        *self.state.lock().await = TokenState::Valid(token);
    }

    /// Removes and returns the cached token. An in-flight refresh is left untouched.
    pub async fn take(&self) -> Option<AccessToken> {
        let mut state = self.state.lock().await;
        match std::mem::replace(&mut *state, TokenState::Idle) {
            TokenState::Valid(token) => Some(token),
            TokenState::Refreshing(pending) => {
                *state = TokenState::Refreshing(pending);
                None
            }
            TokenState::Idle => None,
        }
    }

    /// Drops the cached token so the next call refreshes, e.g. after the upstream rejected
    /// it with 401.
    pub async fn invalidate(&self) {
        if self.take().await.is_some() {
            tracing::debug!("Invalidated {} access token", self.service);
        }
    }

    fn start_refresh(&self, credentials: ClientCredentials) -> PendingRefresh {
        let service = self.service;
        let token_url = self.token_url.clone();
        let http_client = self.http_client.clone();

        async move { request_token(service, credentials, token_url, http_client).await }
            .boxed()
            .shared()
    }

    /// Moves the cache out of `Refreshing` once the refresh it was waiting on completes.
    ///
    /// Only the refresh currently stored is settled; a stale waiter finishing after a newer
    /// refresh started must not overwrite it.
    async fn settle(&self, pending: &PendingRefresh, outcome: &Result<AccessToken, UpstreamError>) {
        let mut state = self.state.lock().await;
        let is_current = matches!(&*state, TokenState::Refreshing(current) if current.ptr_eq(pending));
        if !is_current {
            return;
        }

        *state = match outcome {
            Ok(token) => TokenState::Valid(token.clone()),
            Err(err) => {
                tracing::warn!("{}", err);
                TokenState::Idle
            }
        };
    }
}

/// Performs the client-credentials grant with HTTP Basic client authentication.
async fn request_token(
    service: Upstream,
    credentials: ClientCredentials,
    token_url: TokenUrl,
    http_client: reqwest::Client,
) -> Result<AccessToken, UpstreamError> {
    let client = BasicClient::new(ClientId::new(credentials.client_id))
        .set_client_secret(ClientSecret::new(credentials.client_secret))
        .set_token_uri(token_url);

    let issued_at = Instant::now();
    let response = client
        .exchange_client_credentials()
        .request_async(&http_client)
        .await
        .map_err(|e| UpstreamError::Token {
            service,
            message: e.to_string(),
        })?;

    Ok(AccessToken::issued(
        response.access_token().secret().clone(),
        issued_at,
        response.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME),
    ))
}

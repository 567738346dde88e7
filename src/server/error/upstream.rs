use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Maximum number of characters of an upstream error body kept for diagnostics.
const MAX_BODY_EXCERPT: usize = 512;

/// The third-party services the backend talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Blizzard,
    WarcraftLogs,
    RaidHelper,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blizzard => "Blizzard API",
            Self::WarcraftLogs => "WarcraftLogs API",
            Self::RaidHelper => "Raid-Helper API",
        };
        f.write_str(name)
    }
}

/// Failures talking to an upstream service.
///
/// Cloneable so a single failed token refresh can be handed to every caller waiting on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    /// The service answered with a non-2xx status.
    ///
    /// Results in 502 Bad Gateway, or 404 Not Found when the service itself answered 404.
    #[error("{service} responded with HTTP {status}: {body}")]
    Http {
        service: Upstream,
        status: StatusCode,
        body: String,
    },

    /// A GraphQL endpoint answered 200 but reported errors in its `errors` array.
    ///
    /// Results in 502 Bad Gateway.
    #[error("{service} GraphQL request failed: {}", messages.join("; "))]
    GraphQl {
        service: Upstream,
        messages: Vec<String>,
    },

    /// A 2xx response whose body lacks fields the site depends on.
    ///
    /// Distinct from network failures so a changed upstream schema is easy to spot in logs.
    /// Results in 502 Bad Gateway.
    #[error("{service} returned a payload that violates the expected contract: {detail}")]
    Contract { service: Upstream, detail: String },

    /// The client-credentials token exchange failed.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Failed to obtain {service} access token: {message}")]
    Token { service: Upstream, message: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    ///
    /// Results in 502 Bad Gateway.
    #[error("{service} request failed: {message}")]
    Transport { service: Upstream, message: String },
}

impl UpstreamError {
    /// Builds an `Http` error, truncating the body to a short excerpt.
    pub fn http(service: Upstream, status: StatusCode, body: &str) -> Self {
        Self::Http {
            service,
            status,
            body: body.chars().take(MAX_BODY_EXCERPT).collect(),
        }
    }

    /// Builds a `Transport` error from a reqwest failure.
    pub fn transport(service: Upstream, error: reqwest::Error) -> Self {
        Self::Transport {
            service,
            message: error.to_string(),
        }
    }

    /// Builds a `Contract` error.
    pub fn contract(service: Upstream, detail: impl Into<String>) -> Self {
        Self::Contract {
            service,
            detail: detail.into(),
        }
    }

    /// The service the error originated from.
    pub fn service(&self) -> Upstream {
        match self {
            Self::Http { service, .. }
            | Self::GraphQl { service, .. }
            | Self::Contract { service, .. }
            | Self::Token { service, .. }
            | Self::Transport { service, .. } => *service,
        }
    }

    /// Status code to answer the site with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Http { status, .. } if *status == StatusCode::NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing message that does not leak upstream response bodies.
    pub fn public_message(&self) -> String {
        match self {
            Self::Http { service, status, .. } if *status == StatusCode::NOT_FOUND => {
                format!("{} could not find the requested resource", service)
            }
            Self::Contract { service, .. } => {
                format!("{} returned data in an unexpected format", service)
            }
            Self::Token { service, .. } => format!("Failed to authenticate with {}", service),
            other => format!("{} is currently unavailable", other.service()),
        }
    }
}

//! Application errors and their JSON responses.
//!
//! Handlers and services return `AppError`. Configuration problems, upstream failures and
//! request validation each map to their own status, and every error body is an `ErrorDto`
//! so the site can show `error` without inspecting the status.

pub mod config;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, upstream::UpstreamError},
};

/// Error returned by every handler, service and upstream client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error, either at startup or when a request needs a credential that
    /// was never configured.
    ///
    /// Results in 500 Internal Server Error with the explanatory message so an operator
    /// can see which variable is missing.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Upstream service failure (HTTP status, GraphQL errors, payload contract, token).
    ///
    /// Results in 502 Bad Gateway, or 404 when the upstream reported the resource missing.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// HTTP client construction error from reqwest.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Something the upstream answered for exists but lacks the requested part, e.g. a
    /// guild without a crest or a guild WarcraftLogs has never seen.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// A query parameter is missing or malformed.
    ///
    /// Results in 400 Bad Request with the message naming the parameter.
    #[error("{0}")]
    BadRequest(String),

    /// Startup or runtime failure unrelated to configuration or upstreams.
    ///
    /// Results in 500 Internal Server Error; only the log carries the message.
    #[error("{0}")]
    InternalError(String),
}

/// Renders an `AppError` as a status and `ErrorDto`.
///
/// Upstream failures are logged with the upstream body excerpt; the response carries only
/// a short message that names the service.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound`, and upstream 404s
/// - 500 Internal Server Error - For configuration and internal errors
/// - 502 Bad Gateway - For all other upstream failures
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::ConfigErr(err) => {
                tracing::error!("Configuration error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UpstreamErr(err) => {
                let status = err.status_code();
                if status.is_server_error() {
                    tracing::error!("{}", err);
                } else {
                    tracing::debug!("{}", err);
                }
                (
                    status,
                    Json(ErrorDto {
                        error: err.public_message(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

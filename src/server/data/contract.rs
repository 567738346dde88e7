//! Upstream payload contracts.
//!
//! Every upstream response goes through the same two steps: the HTTP layer is checked by
//! [`read_json`], then the JSON is matched against the subset of fields the site depends on
//! by [`parse`]. Contract types only declare the fields they need and keep the rest in a
//! `#[serde(flatten)]` map when the payload is passed through to the site.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::upstream::{Upstream, UpstreamError};

/// Turns an HTTP response into JSON, mapping non-2xx statuses and unparseable bodies.
///
/// # Returns
/// - `Ok(Value)` - 2xx response with a JSON body
/// - `Err(UpstreamError::Http)` - Non-2xx status, carrying a body excerpt
/// - `Err(UpstreamError::Transport)` - Body could not be read
/// - `Err(UpstreamError::Contract)` - 2xx response whose body is not JSON
pub async fn read_json(
    service: Upstream,
    response: reqwest::Response,
) -> Result<Value, UpstreamError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UpstreamError::transport(service, e))?;

    if !status.is_success() {
        return Err(UpstreamError::http(service, status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| UpstreamError::contract(service, format!("body is not valid JSON: {}", e)))
}

/// Validates a JSON payload against a contract type.
///
/// # Returns
/// - `Ok(T)` - Payload contains every field `T` requires
/// - `Err(UpstreamError::Contract)` - A required field is missing or has the wrong type
pub fn parse<T: DeserializeOwned>(service: Upstream, payload: Value) -> Result<T, UpstreamError> {
    serde_json::from_value(payload).map_err(|e| UpstreamError::contract(service, e.to_string()))
}

//! Upstream endpoint URL construction.

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

/// Parses a configured base URL, rejecting URLs that cannot carry path segments.
pub fn parse_base_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()));
    }

    Ok(url)
}

/// Appends path segments to a base URL.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::InternalError(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

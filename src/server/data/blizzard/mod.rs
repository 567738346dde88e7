//! Blizzard Game Data and Profile API client.
//!
//! Every request carries a bearer token from the client's [`TokenCache`] and the `namespace`
//! and `locale` query parameters Blizzard requires. Endpoint methods live in the submodules
//! grouped by resource.

pub mod character;
pub mod guild;
pub mod media;

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{
    config::{Config, GameVersion},
    data::{
        contract::{parse, read_json},
        endpoint::{endpoint, parse_base_url},
        token::TokenCache,
    },
    error::{
        config::ConfigError,
        upstream::{Upstream, UpstreamError},
        AppError,
    },
};

/// Blizzard data domain selected by the `namespace` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Game data that only changes with patches, such as media.
    Static,
    /// Guild and character profiles.
    Profile,
}

impl Namespace {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Profile => "profile",
        }
    }
}

/// Client for one Blizzard region.
///
/// Cheap to clone; clones share the token cache.
#[derive(Clone)]
pub struct BlizzardClient {
    http_client: reqwest::Client,
    tokens: TokenCache,
    api_url: Url,
    locale: String,
    region: String,
    game_version: GameVersion,
}

impl BlizzardClient {
    /// Creates a client from configuration.
    ///
    /// # Arguments
    /// - `config` - Application configuration; credentials may be missing
    /// - `http_client` - Shared HTTP client
    ///
    /// # Returns
    /// - `Ok(BlizzardClient)` - Client ready for use
    /// - `Err(ConfigError::InvalidEnvVar)` - API or token URL is malformed
    pub fn new(config: &Config, http_client: reqwest::Client) -> Result<Self, ConfigError> {
        let blizzard = &config.blizzard;
        let tokens = TokenCache::new(
            Upstream::Blizzard,
            blizzard.credentials.clone(),
            &blizzard.token_url,
            http_client.clone(),
        )?;

        Ok(Self {
            http_client,
            tokens,
            api_url: parse_base_url("Blizzard API URL", &blizzard.api_url)?,
            locale: blizzard.locale.clone(),
            region: config.guild.region.clone(),
            game_version: config.game_version,
        })
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// Full namespace value, e.g. `profile-classic-us` or `static-us` for retail.
    pub fn namespace(&self, namespace: Namespace) -> String {
        match self.game_version.namespace_infix() {
            Some(infix) => format!("{}-{}-{}", namespace.prefix(), infix, self.region),
            None => format!("{}-{}", namespace.prefix(), self.region),
        }
    }

    /// Performs an authenticated GET and validates the payload against `T`.
    ///
    /// Path segments are percent-encoded individually, so slugs with non-ASCII characters are
    /// safe to pass. A 401 drops the cached token so the next request fetches a new one.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        namespace: Namespace,
    ) -> Result<T, AppError> {
        let token = self.tokens.get_token().await?;
        let url = endpoint(&self.api_url, segments)?;

        tracing::debug!("GET {} ({})", url.path(), self.namespace(namespace));

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .query(&[
                ("namespace", self.namespace(namespace)),
                ("locale", self.locale.clone()),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::transport(Upstream::Blizzard, e))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.tokens.invalidate().await;
        }

        let payload = read_json(Upstream::Blizzard, response).await?;

        Ok(parse(Upstream::Blizzard, payload)?)
    }
}

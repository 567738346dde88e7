//! WarcraftLogs GraphQL API v2 client.
//!
//! The API has a single endpoint. Every call POSTs `{query, variables}` with a bearer token
//! and must check the `errors` array, since GraphQL reports failures with a 200 status.

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use crate::server::{
    config::Config,
    data::{
        contract::{parse, read_json},
        endpoint::parse_base_url,
        token::TokenCache,
    },
    error::{
        config::ConfigError,
        upstream::{Upstream, UpstreamError},
        AppError,
    },
    model::{
        target::GuildTarget,
        warcraft_logs::{GraphQlResponse, GuildMembersData, LogsMember, Report, ReportsData},
    },
};

const GUILD_REPORTS_QUERY: &str = r#"
query GuildReports($guildName: String!, $guildServerSlug: String!, $guildServerRegion: String!, $limit: Int!) {
  reportData {
    reports(guildName: $guildName, guildServerSlug: $guildServerSlug, guildServerRegion: $guildServerRegion, limit: $limit) {
      data {
        code
        title
        startTime
        zone { name }
        fights { kill fightPercentage }
      }
    }
  }
}
"#;

const GUILD_MEMBERS_QUERY: &str = r#"
query GuildMembers($name: String!, $serverSlug: String!, $serverRegion: String!) {
  guildData {
    guild(name: $name, serverSlug: $serverSlug, serverRegion: $serverRegion) {
      members(limit: 100) {
        data {
          name
          classID
          level
          guildRank
          server { slug }
        }
      }
    }
  }
}
"#;

/// Client for the WarcraftLogs site matching the configured game version.
///
/// Cheap to clone; clones share the token cache.
#[derive(Clone)]
pub struct WarcraftLogsClient {
    http_client: reqwest::Client,
    tokens: TokenCache,
    api_url: Url,
}

impl WarcraftLogsClient {
    /// Creates a client from configuration.
    ///
    /// # Returns
    /// - `Ok(WarcraftLogsClient)` - Client ready for use
    /// - `Err(ConfigError::InvalidEnvVar)` - API or token URL is malformed
    pub fn new(config: &Config, http_client: reqwest::Client) -> Result<Self, ConfigError> {
        let logs = &config.warcraft_logs;
        let tokens = TokenCache::new(
            Upstream::WarcraftLogs,
            logs.credentials.clone(),
            &logs.token_url,
            http_client.clone(),
        )?;

        Ok(Self {
            http_client,
            tokens,
            api_url: parse_base_url("WarcraftLogs API URL", &logs.api_url)?,
        })
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// Runs a GraphQL query and validates its `data` object against `T`.
    ///
    /// # Arguments
    /// - `query` - GraphQL document
    /// - `variables` - JSON object of query variables
    ///
    /// # Returns
    /// - `Ok(T)` - The `data` object matched the contract
    /// - `Err(AppError::UpstreamErr(UpstreamError::GraphQl))` - The response carried errors
    /// - `Err(AppError::UpstreamErr(UpstreamError::Contract))` - No `data`, or `data` has the
    ///   wrong shape
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, AppError> {
        let token = self.tokens.get_token().await?;

        tracing::debug!("POST {} GraphQL query", self.api_url.path());

        let response = self
            .http_client
            .post(self.api_url.clone())
            .bearer_auth(token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| UpstreamError::transport(Upstream::WarcraftLogs, e))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.tokens.invalidate().await;
        }

        let payload = read_json(Upstream::WarcraftLogs, response).await?;
        let response: GraphQlResponse = parse(Upstream::WarcraftLogs, payload)?;

        if !response.errors.is_empty() {
            return Err(UpstreamError::GraphQl {
                service: Upstream::WarcraftLogs,
                messages: response.errors.into_iter().map(|e| e.message).collect(),
            }
            .into());
        }

        let data = response
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| UpstreamError::contract(Upstream::WarcraftLogs, "response has no data"))?;

        Ok(parse(Upstream::WarcraftLogs, data)?)
    }

    /// Fetches the guild's most recent reports, newest first.
    ///
    /// # Arguments
    /// - `target` - Guild to list reports for
    /// - `limit` - Maximum number of reports
    pub async fn guild_reports(
        &self,
        target: &GuildTarget,
        limit: u32,
    ) -> Result<Vec<Report>, AppError> {
        let data: ReportsData = self
            .query(
                GUILD_REPORTS_QUERY,
                json!({
                    "guildName": target.name,
                    "guildServerSlug": target.realm_slug,
                    "guildServerRegion": target.region,
                    "limit": limit,
                }),
            )
            .await?;

        Ok(data.report_data.reports.data)
    }

    /// Fetches the guild roster as WarcraftLogs knows it.
    ///
    /// # Returns
    /// - `Ok(Vec<LogsMember>)` - Members with at least one logged fight
    /// - `Err(AppError::NotFound)` - WarcraftLogs has no such guild
    pub async fn guild_members(&self, target: &GuildTarget) -> Result<Vec<LogsMember>, AppError> {
        let data: GuildMembersData = self
            .query(
                GUILD_MEMBERS_QUERY,
                json!({
                    "name": target.name,
                    "serverSlug": target.realm_slug,
                    "serverRegion": target.region,
                }),
            )
            .await?;

        let guild = data.guild_data.guild.ok_or_else(|| {
            AppError::NotFound(format!(
                "Guild {} on {} is not known to WarcraftLogs",
                target.name, target.realm_slug
            ))
        })?;

        Ok(guild.members.data)
    }
}

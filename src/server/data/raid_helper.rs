//! Raid-Helper REST API client.
//!
//! Authenticates with a static API key rather than OAuth. The events listing is paginated
//! with a `Page` request header and filtered with further headers; [`RaidHelperClient::events`]
//! walks every page and merges the results.

use dioxus_logger::tracing;
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::{
    model::event::RaidEventsDto,
    server::{
        config::Config,
        data::{
            contract::{parse, read_json},
            endpoint::{endpoint, parse_base_url},
        },
        error::{
            config::ConfigError,
            upstream::{Upstream, UpstreamError},
            AppError,
        },
        model::raid_helper::{EventFilter, EventsPage},
    },
};

/// Upper bound on pages fetched for one listing.
pub const MAX_PAGES: u32 = 20;

#[derive(Clone)]
pub struct RaidHelperClient {
    http_client: reqwest::Client,
    api_url: Url,
    server_id: Option<String>,
    api_key: Option<String>,
}

impl RaidHelperClient {
    /// Creates a client from configuration. Server id and API key may be missing; they are
    /// required when events are requested.
    pub fn new(config: &Config, http_client: reqwest::Client) -> Result<Self, ConfigError> {
        let raid_helper = &config.raid_helper;

        Ok(Self {
            http_client,
            api_url: parse_base_url("Raid-Helper API URL", &raid_helper.api_url)?,
            server_id: raid_helper.server_id.clone(),
            api_key: raid_helper.api_key.clone(),
        })
    }

    /// Fetches every page of the server's events and merges them into one envelope.
    ///
    /// Pages are fetched one after another starting at page 1, up to [`MAX_PAGES`]. The
    /// merged envelope reports the upstream page count, `currentPage` 1 and the number of
    /// events actually collected.
    ///
    /// # Arguments
    /// - `filter` - Channel, time range and sign-up inclusion
    ///
    /// # Returns
    /// - `Ok(RaidEventsDto)` - Merged events with `fallback` false
    /// - `Err(AppError::ConfigErr)` - Server id or API key not configured
    /// - `Err(AppError::UpstreamErr)` - Any page failed
    pub async fn events(&self, filter: &EventFilter) -> Result<RaidEventsDto, AppError> {
        let server_id = self
            .server_id
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("RAID_HELPER_SERVER_ID".to_string()))?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("RAID_HELPER_API_KEY".to_string()))?;

        let url = endpoint(&self.api_url, &["servers", server_id, "events"])?;

        let first = self.events_page(&url, api_key, filter, 1).await?;
        let pages = first.pages.max(1);
        let mut posted_events = first.posted_events;

        if pages > MAX_PAGES {
            tracing::warn!(
                "Raid-Helper reported {} pages of events, only the first {} are fetched",
                pages,
                MAX_PAGES
            );
        }

        for page in 2..=pages.min(MAX_PAGES) {
            let next = self.events_page(&url, api_key, filter, page).await?;
            posted_events.extend(next.posted_events);
        }

        Ok(RaidEventsDto {
            pages,
            current_page: 1,
            event_count: posted_events.len() as u32,
            posted_events,
            fallback: false,
        })
    }

    async fn events_page(
        &self,
        url: &Url,
        api_key: &str,
        filter: &EventFilter,
        page: u32,
    ) -> Result<EventsPage, AppError> {
        tracing::debug!("GET {} page {}", url.path(), page);

        let mut request = self
            .http_client
            .get(url.clone())
            .header(AUTHORIZATION, api_key)
            .header("Page", page.to_string())
            .header("IncludeSignUps", filter.include_sign_ups.to_string());

        if let Some(channel_id) = &filter.channel_id {
            request = request.header("ChannelFilter", channel_id.as_str());
        }
        if let Some(start_time) = filter.start_time {
            request = request.header("StartTimeFilter", start_time.to_string());
        }
        if let Some(end_time) = filter.end_time {
            request = request.header("EndTimeFilter", end_time.to_string());
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::transport(Upstream::RaidHelper, e))?;

        let payload = read_json(Upstream::RaidHelper, response).await?;

        Ok(parse(Upstream::RaidHelper, payload)?)
    }
}

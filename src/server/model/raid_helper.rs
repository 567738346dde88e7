//! Raid-Helper REST API contracts and request filters.

use serde::Deserialize;

use crate::model::event::RaidEventDto;

/// One page of `GET /servers/{serverId}/events`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    #[serde(default = "one")]
    pub pages: u32,
    #[serde(default = "one")]
    pub current_page: u32,
    #[serde(default)]
    pub posted_events: Vec<RaidEventDto>,
}

fn one() -> u32 {
    1
}

/// Filters forwarded to Raid-Helper as request headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub channel_id: Option<String>,
    /// Epoch seconds.
    pub start_time: Option<i64>,
    /// Epoch seconds.
    pub end_time: Option<i64>,
    pub include_sign_ups: bool,
}

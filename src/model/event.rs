use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// All pages of a Raid-Helper events listing merged into one envelope.
///
/// `fallback` is true when the events are the static placeholder set served because
/// Raid-Helper could not be reached.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RaidEventsDto {
    pub pages: u32,
    pub current_page: u32,
    pub event_count: u32,
    pub posted_events: Vec<RaidEventDto>,
    #[serde(default)]
    pub fallback: bool,
}

/// A scheduled event. Fields the site relies on are typed; everything else Raid-Helper
/// sends is passed through untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RaidEventDto {
    pub id: String,
    pub title: String,
    /// Epoch seconds.
    pub start_time: i64,
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub leader_name: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

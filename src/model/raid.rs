use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaidLogDto {
    pub code: String,
    pub title: String,
    pub raid: String,
    pub date: Option<DateTime<Utc>>,
    pub kills: u32,
    pub wipes: u32,
    /// Best boss progress reached in the report, as a percentage (100 means a kill).
    pub best_performance: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogsMemberDto {
    pub name: String,
    pub realm: String,
    pub level: u32,
    pub class: String,
    pub rank_index: u32,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildInfoDto {
    pub name: String,
    pub realm: String,
    pub faction: String,
    pub created_at: Option<DateTime<Utc>>,
    pub member_count: u32,
    pub achievement_points: u32,
    pub description: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildAchievementsDto {
    pub total_quantity: u32,
    pub total_points: u32,
    /// Most recent first.
    pub recent: Vec<AchievementDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub id: u64,
    pub name: String,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildActivityDto {
    /// Upstream activity type, e.g. `CHARACTER_ACHIEVEMENT` or `ENCOUNTER`.
    pub kind: String,
    pub character: Option<String>,
    pub summary: String,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildCrestDto {
    pub emblem: CrestComponentDto,
    pub border: CrestComponentDto,
    pub background_color: Option<CrestColorDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrestComponentDto {
    pub id: u32,
    pub image_url: Option<String>,
    pub color: Option<CrestColorDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
pub struct CrestColorDto {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

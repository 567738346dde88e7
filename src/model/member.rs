use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub name: String,
    /// Realm slug of the character; may differ from the guild realm on connected realms.
    pub realm: String,
    pub level: u32,
    pub class: String,
    pub class_icon_url: String,
    pub race: String,
    pub rank: String,
    pub rank_index: u32,
    pub role: MemberRole,
    /// 0 when unknown or not yet looked up.
    pub average_item_level: u32,
    pub item_level_tier: ItemLevelTier,
}

/// Raid role. None of the upstream roster endpoints expose it, so it is `Unknown` unless
/// a source explicitly provides one.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Tank,
    Healer,
    Dps,
    #[default]
    Unknown,
}

/// Badge color bucket for an item level.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemLevelTier {
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

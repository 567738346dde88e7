use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Equipped items keyed by upstream slot type (`HEAD`, `MAIN_HAND`, ...).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDto {
    pub character: String,
    pub items: BTreeMap<String, EquippedItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquippedItemDto {
    pub slot: String,
    pub slot_name: String,
    pub item_id: u64,
    pub item_level: Option<u32>,
    pub quality: String,
    pub name: String,
    pub enchantments: Vec<String>,
    pub stats: Vec<String>,
    pub media_id: Option<u64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemMediaDto {
    pub item_id: u64,
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMediaDto {
    pub character: String,
    pub avatar_url: Option<String>,
    pub inset_url: Option<String>,
    pub main_url: Option<String>,
}

//! Blizzard Game Data / Profile API contracts.
//!
//! Only the fields the site reads are declared. Requests always send a `locale`, so
//! localized names arrive as plain strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::{
    model::{
        character::{EquipmentDto, EquippedItemDto},
        guild::{
            AchievementDto, CrestColorDto, CrestComponentDto, GuildAchievementsDto,
            GuildActivityDto, GuildCrestDto, GuildInfoDto,
        },
        member::{MemberDto, MemberRole},
    },
    server::{
        config::GuildConfig,
        model::lookup::{blizzard_class_name, blizzard_race_name},
        util::{item_level::item_level_tier, media::class_icon_url},
    },
};

/// `{ "type": "HORDE", "name": "Horde" }` style enum reference.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TypedName {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl TypedName {
    /// Localized name, or the type key when the name is absent.
    pub fn display(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.kind.clone())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IdRef {
    pub id: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RealmRef {
    #[serde(default)]
    pub name: Option<String>,
    pub slug: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Guild {
    pub name: String,
    #[serde(default)]
    pub faction: Option<TypedName>,
    #[serde(default)]
    pub achievement_points: u32,
    #[serde(default)]
    pub member_count: u32,
    pub realm: RealmRef,
    #[serde(default)]
    pub crest: Option<GuildCrest>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub created_timestamp: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GuildCrest {
    pub emblem: CrestPart,
    pub border: CrestPart,
    #[serde(default)]
    pub background: Option<CrestBackground>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CrestPart {
    pub id: u32,
    #[serde(default)]
    pub color: Option<CrestColor>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CrestBackground {
    #[serde(default)]
    pub color: Option<CrestColor>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct CrestColor {
    pub rgba: Rgba,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GuildRoster {
    pub members: Vec<RosterEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RosterEntry {
    pub character: RosterCharacter,
    pub rank: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RosterCharacter {
    pub name: String,
    pub level: u32,
    pub realm: RealmRef,
    pub playable_class: IdRef,
    pub playable_race: IdRef,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GuildAchievements {
    #[serde(default)]
    pub total_quantity: u32,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub recent_events: Vec<AchievementEvent>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AchievementEvent {
    pub achievement: NamedRef,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GuildActivity {
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ActivityEntry {
    pub activity: TypedName,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub character_achievement: Option<CharacterAchievement>,
    #[serde(default)]
    pub encounter_completed: Option<EncounterCompleted>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CharacterAchievement {
    pub character: CharacterRef,
    pub achievement: NamedRef,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CharacterRef {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EncounterCompleted {
    pub encounter: NamedRef,
    #[serde(default)]
    pub mode: Option<TypedName>,
}

/// Character profile summary. Validated, then passed through to the site whole.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CharacterProfile {
    pub name: String,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_item_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipped_item_level: Option<u32>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl CharacterProfile {
    /// Best available item level; classic profiles sometimes only report the equipped one.
    pub fn item_level(&self) -> u32 {
        self.average_item_level
            .or(self.equipped_item_level)
            .unwrap_or(0)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CharacterEquipment {
    #[serde(default)]
    pub equipped_items: Vec<EquippedItem>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EquippedItem {
    pub item: IdRef,
    pub slot: TypedName,
    pub quality: TypedName,
    pub name: String,
    #[serde(default)]
    pub media: Option<IdRef>,
    #[serde(default)]
    pub level: Option<ItemLevelValue>,
    #[serde(default)]
    pub enchantments: Vec<DisplayString>,
    #[serde(default)]
    pub stats: Vec<ItemStat>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ItemLevelValue {
    pub value: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DisplayString {
    #[serde(default)]
    pub display_string: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ItemStat {
    #[serde(default)]
    pub display: Option<DisplayString>,
}

/// Asset list shared by item, character and guild crest media documents.
#[derive(Deserialize, Debug, Clone)]
pub struct MediaAssets {
    #[serde(default)]
    pub assets: Vec<MediaAsset>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MediaAsset {
    pub key: String,
    pub value: String,
}

impl MediaAssets {
    /// URL of the asset with the given key.
    pub fn asset(&self, key: &str) -> Option<String> {
        self.assets
            .iter()
            .find(|asset| asset.key == key)
            .map(|asset| asset.value.clone())
    }
}

fn from_epoch_millis(timestamp: Option<i64>) -> Option<DateTime<Utc>> {
    timestamp.and_then(DateTime::from_timestamp_millis)
}

impl Guild {
    /// Converts the guild summary to its site shape.
    ///
    /// # Arguments
    /// - `description` - Guild description, which Blizzard does not provide
    pub fn into_dto(self, description: String) -> GuildInfoDto {
        GuildInfoDto {
            realm: self.realm.name.unwrap_or(self.realm.slug),
            faction: self
                .faction
                .map(|faction| faction.display())
                .unwrap_or_else(|| "Unknown".to_string()),
            created_at: from_epoch_millis(self.created_timestamp),
            member_count: self.member_count,
            achievement_points: self.achievement_points,
            name: self.name,
            description,
        }
    }
}

impl CrestColor {
    pub fn to_dto(self) -> CrestColorDto {
        CrestColorDto {
            r: self.rgba.r,
            g: self.rgba.g,
            b: self.rgba.b,
            a: self.rgba.a,
        }
    }
}

impl CrestPart {
    pub fn to_dto(&self, image_url: Option<String>) -> CrestComponentDto {
        CrestComponentDto {
            id: self.id,
            image_url,
            color: self.color.map(CrestColor::to_dto),
        }
    }
}

impl GuildCrest {
    /// Converts the crest ids and colors, attaching the resolved layer images.
    pub fn to_dto(&self, emblem_url: Option<String>, border_url: Option<String>) -> GuildCrestDto {
        GuildCrestDto {
            emblem: self.emblem.to_dto(emblem_url),
            border: self.border.to_dto(border_url),
            background_color: self
                .background
                .as_ref()
                .and_then(|background| background.color)
                .map(CrestColor::to_dto),
        }
    }
}

impl RosterEntry {
    /// Converts a roster entry to a member with no item level yet.
    pub fn into_dto(self, guild: &GuildConfig) -> MemberDto {
        let class = blizzard_class_name(self.character.playable_class.id);

        MemberDto {
            name: self.character.name,
            realm: self.character.realm.slug,
            level: self.character.level,
            class: class.to_string(),
            class_icon_url: class_icon_url(class),
            race: blizzard_race_name(self.character.playable_race.id).to_string(),
            rank: guild.rank_name(self.rank),
            rank_index: self.rank,
            role: MemberRole::Unknown,
            average_item_level: 0,
            item_level_tier: item_level_tier(0),
        }
    }
}

impl GuildAchievements {
    /// Converts totals and recent completions, most recent first.
    pub fn into_dto(self) -> GuildAchievementsDto {
        let mut recent: Vec<AchievementDto> = self
            .recent_events
            .into_iter()
            .map(|event| AchievementDto {
                id: event.achievement.id,
                name: event.achievement.name,
                completed_at: from_epoch_millis(event.timestamp),
            })
            .collect();
        recent.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

        GuildAchievementsDto {
            total_quantity: self.total_quantity,
            total_points: self.total_points,
            recent,
        }
    }
}

impl ActivityEntry {
    pub fn into_dto(self) -> GuildActivityDto {
        let (character, summary) = match (self.character_achievement, self.encounter_completed) {
            (Some(earned), _) => (
                Some(earned.character.name.clone()),
                format!("{} earned {}", earned.character.name, earned.achievement.name),
            ),
            (None, Some(completed)) => {
                let summary = match completed.mode {
                    Some(mode) => format!(
                        "Defeated {} ({})",
                        completed.encounter.name,
                        mode.display()
                    ),
                    None => format!("Defeated {}", completed.encounter.name),
                };
                (None, summary)
            }
            (None, None) => (None, self.activity.display()),
        };

        GuildActivityDto {
            kind: self.activity.kind,
            character,
            summary,
            occurred_at: from_epoch_millis(self.timestamp),
        }
    }
}

impl CharacterEquipment {
    /// Converts equipped items to a map keyed by slot type. A slot reported twice keeps the
    /// last item.
    pub fn into_dto(self, character: String) -> EquipmentDto {
        let items: BTreeMap<String, EquippedItemDto> = self
            .equipped_items
            .into_iter()
            .map(|item| (item.slot.kind.clone(), item.into_dto()))
            .collect();

        EquipmentDto { character, items }
    }
}

impl EquippedItem {
    pub fn into_dto(self) -> EquippedItemDto {
        EquippedItemDto {
            slot_name: self.slot.display(),
            slot: self.slot.kind,
            item_id: self.item.id,
            item_level: self.level.map(|level| level.value),
            quality: self.quality.kind,
            name: self.name,
            enchantments: self
                .enchantments
                .into_iter()
                .filter_map(|enchantment| enchantment.display_string)
                .collect(),
            stats: self
                .stats
                .into_iter()
                .filter_map(|stat| stat.display.and_then(|display| display.display_string))
                .collect(),
            media_id: self.media.map(|media| media.id),
        }
    }
}

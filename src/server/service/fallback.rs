//! Placeholder data served when an upstream service is unavailable.
//!
//! Fallback values are recognisable as placeholders (an empty realm, fixed report codes
//! starting with `fallback-`) so the site can label them.

use chrono::{Duration, Utc};
use serde_json::Map;

use crate::{
    model::{
        event::{RaidEventDto, RaidEventsDto},
        guild::GuildInfoDto,
        member::{MemberDto, MemberRole},
        raid::RaidLogDto,
    },
    server::{
        config::GuildConfig,
        util::{item_level::item_level_tier, media::class_icon_url},
    },
};

const PLACEHOLDER_MEMBERS: [(&str, &str, &str, u32, u32); 5] = [
    ("Guildmaster", "Warrior", "Orc", 0, 0),
    ("Officer", "Priest", "Undead", 1, 0),
    ("Mainraider", "Mage", "Troll", 4, 0),
    ("Raider", "Hunter", "Tauren", 4, 0),
    ("Member", "Shaman", "Orc", 6, 0),
];

const PLACEHOLDER_RAIDS: [(&str, &str, u32, u32); 3] = [
    ("fallback-mc", "Molten Core", 10, 0),
    ("fallback-ony", "Onyxia's Lair", 1, 1),
    ("fallback-bwl", "Blackwing Lair", 3, 4),
];

/// Weekly raid nights relative to now: title, days ahead, duration in hours.
const PLACEHOLDER_EVENTS: [(&str, i64, i64); 2] = [("Raid Night", 2, 3), ("Alt Run", 5, 2)];

/// Guild summary built from configuration alone.
pub fn guild_info(guild: &GuildConfig) -> GuildInfoDto {
    GuildInfoDto {
        name: guild.name.clone().unwrap_or_else(|| "Guild".to_string()),
        realm: guild.realm.clone().unwrap_or_default(),
        faction: "Unknown".to_string(),
        created_at: None,
        member_count: 0,
        achievement_points: 0,
        description: guild.description.clone().unwrap_or_default(),
    }
}

/// A small placeholder roster using the configured rank names.
pub fn members(guild: &GuildConfig) -> Vec<MemberDto> {
    PLACEHOLDER_MEMBERS
        .iter()
        .map(|&(name, class, race, rank, item_level)| MemberDto {
            name: name.to_string(),
            realm: String::new(),
            level: 60,
            class: class.to_string(),
            class_icon_url: class_icon_url(class),
            race: race.to_string(),
            rank: guild.rank_name(rank),
            rank_index: rank,
            role: MemberRole::Unknown,
            average_item_level: item_level,
            item_level_tier: item_level_tier(item_level),
        })
        .collect()
}

/// Placeholder raid reports without dates.
pub fn raid_logs() -> Vec<RaidLogDto> {
    PLACEHOLDER_RAIDS
        .iter()
        .map(|&(code, raid, kills, wipes)| RaidLogDto {
            code: code.to_string(),
            title: raid.to_string(),
            raid: raid.to_string(),
            date: None,
            kills,
            wipes,
            best_performance: None,
        })
        .collect()
}

/// Placeholder events scheduled a few days from now, flagged as fallback.
pub fn events() -> RaidEventsDto {
    let now = Utc::now();

    let posted_events: Vec<RaidEventDto> = PLACEHOLDER_EVENTS
        .iter()
        .enumerate()
        .map(|(index, &(title, days_ahead, hours))| {
            let start = now + Duration::days(days_ahead);
            RaidEventDto {
                id: format!("fallback-{}", index + 1),
                title: title.to_string(),
                start_time: start.timestamp(),
                end_time: Some((start + Duration::hours(hours)).timestamp()),
                leader_name: None,
                channel_id: None,
                extra: Map::new(),
            }
        })
        .collect();

    RaidEventsDto {
        pages: 1,
        current_page: 1,
        event_count: posted_events.len() as u32,
        posted_events,
        fallback: true,
    }
}

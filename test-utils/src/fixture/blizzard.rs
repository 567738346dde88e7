//! Blizzard Game Data / Profile API payloads.

use serde_json::{json, Value};

/// Guild payload as returned by `/data/wow/guild/{realm}/{name}`.
///
/// # Arguments
/// - `name` - Guild display name
/// - `realm` - Realm display name
pub fn guild(name: &str, realm: &str) -> Value {
    json!({
        "id": 70012345,
        "name": name,
        "faction": { "type": "HORDE", "name": "Horde" },
        "achievement_points": 1450,
        "member_count": 87,
        "realm": {
            "id": 4408,
            "name": realm,
            "slug": realm.to_lowercase().replace(' ', "-")
        },
        "crest": {
            "emblem": {
                "id": 126,
                "media": { "id": 126 },
                "color": { "id": 4, "rgba": { "r": 232, "g": 183, "b": 56, "a": 1.0 } }
            },
            "border": {
                "id": 5,
                "media": { "id": 5 },
                "color": { "id": 15, "rgba": { "r": 103, "g": 99, "b": 92, "a": 1.0 } }
            },
            "background": {
                "color": { "id": 45, "rgba": { "r": 177, "g": 0, "b": 43, "a": 1.0 } }
            }
        },
        "created_timestamp": 1566853925000i64
    })
}

/// Single roster entry.
///
/// # Arguments
/// - `name` - Character name
/// - `level` - Character level
/// - `class_id` - Blizzard playable class id
/// - `race_id` - Blizzard playable race id
/// - `rank` - Guild rank index (0 is guild master)
pub fn roster_member(name: &str, level: u32, class_id: u32, race_id: u32, rank: u32) -> Value {
    json!({
        "character": {
            "key": { "href": "https://us.api.blizzard.com/profile/wow/character/pyrewood-village/x" },
            "name": name,
            "id": 1000 + level,
            "realm": { "id": 4408, "slug": "pyrewood-village" },
            "level": level,
            "playable_class": { "id": class_id },
            "playable_race": { "id": race_id }
        },
        "rank": rank
    })
}

/// Roster payload as returned by `/data/wow/guild/{realm}/{name}/roster`.
pub fn roster(members: &[Value]) -> Value {
    json!({
        "guild": { "name": "Nose Beers But No Gear", "id": 70012345 },
        "members": members
    })
}

/// Builds `count` roster members named `Member1..MemberN` with rotating classes.
pub fn roster_of(count: usize) -> Value {
    let members: Vec<Value> = (1..=count)
        .map(|i| roster_member(&format!("Member{}", i), 60, (i % 9 + 1) as u32, 2, 4))
        .collect();
    roster(&members)
}

/// Character profile as returned by `/profile/wow/character/{realm}/{name}`.
///
/// # Arguments
/// - `name` - Character name
/// - `average_item_level` - Average item level reported by the profile
pub fn character_profile(name: &str, average_item_level: u32) -> Value {
    json!({
        "id": 5551234,
        "name": name,
        "gender": { "type": "FEMALE", "name": "Female" },
        "faction": { "type": "HORDE", "name": "Horde" },
        "race": { "id": 2, "name": "Orc" },
        "character_class": { "id": 7, "name": "Shaman" },
        "realm": { "id": 4408, "name": "Pyrewood Village", "slug": "pyrewood-village" },
        "guild": { "name": "Nose Beers But No Gear", "id": 70012345 },
        "level": 60,
        "experience": 0,
        "achievement_points": 430,
        "last_login_timestamp": 1760000000000i64,
        "average_item_level": average_item_level,
        "equipped_item_level": average_item_level
    })
}

/// Equipment payload with a weapon and a chest piece.
pub fn equipment() -> Value {
    json!({
        "character": { "name": "Thrall", "id": 5551234 },
        "equipped_items": [
            {
                "item": { "id": 19019 },
                "slot": { "type": "MAIN_HAND", "name": "Main Hand" },
                "quantity": 1,
                "quality": { "type": "LEGENDARY", "name": "Legendary" },
                "name": "Thunderfury, Blessed Blade of the Windseeker",
                "media": { "id": 19019 },
                "level": { "value": 80, "display_string": "Item Level 80" },
                "enchantments": [
                    { "display_string": "Enchanted: Crusader", "enchantment_id": 1900 }
                ],
                "stats": [
                    { "type": { "type": "AGILITY", "name": "Agility" }, "value": 5,
                      "display": { "display_string": "+5 Agility" } },
                    { "type": { "type": "STAMINA", "name": "Stamina" }, "value": 8,
                      "display": { "display_string": "+8 Stamina" } }
                ]
            },
            {
                "item": { "id": 16853 },
                "slot": { "type": "CHEST", "name": "Chest" },
                "quantity": 1,
                "quality": { "type": "EPIC", "name": "Epic" },
                "name": "Lawbringer Chestguard",
                "media": { "id": 16853 },
                "level": { "value": 66 }
            }
        ]
    })
}

/// Item media payload as returned by `/data/wow/media/item/{id}`.
pub fn item_media(item_id: u64) -> Value {
    json!({
        "id": item_id,
        "assets": [
            {
                "key": "icon",
                "value": format!("https://render.worldofwarcraft.com/classic-us/icons/56/item_{}.jpg", item_id),
                "file_data_id": 135349
            }
        ]
    })
}

/// Character media payload as returned by `/profile/wow/character/{realm}/{name}/character-media`.
pub fn character_media(name: &str) -> Value {
    let base = format!(
        "https://render.worldofwarcraft.com/classic-us/character/pyrewood-village/{}",
        name.to_lowercase()
    );
    json!({
        "character": { "name": name },
        "assets": [
            { "key": "avatar", "value": format!("{}-avatar.jpg", base) },
            { "key": "inset", "value": format!("{}-inset.jpg", base) },
            { "key": "main-raw", "value": format!("{}-main-raw.png", base) }
        ]
    })
}

/// Guild achievements payload.
pub fn guild_achievements() -> Value {
    json!({
        "guild": { "name": "Nose Beers But No Gear" },
        "total_quantity": 54,
        "total_points": 1450,
        "achievements": [
            { "id": 5362, "achievement": { "id": 5362, "name": "Guild Level 5" },
              "completed_timestamp": 1700000000000i64 }
        ],
        "recent_events": [
            { "achievement": { "id": 5362, "name": "Guild Level 5" }, "timestamp": 1700000000000i64 },
            { "achievement": { "id": 4912, "name": "Guild Level 10" }, "timestamp": 1701000000000i64 }
        ]
    })
}

/// Guild activity payload.
pub fn guild_activity() -> Value {
    json!({
        "guild": { "name": "Nose Beers But No Gear" },
        "activities": [
            {
                "character_achievement": {
                    "character": { "name": "Thrall", "realm": { "slug": "pyrewood-village" } },
                    "achievement": { "id": 6, "name": "Level 10" }
                },
                "activity": { "type": "CHARACTER_ACHIEVEMENT" },
                "timestamp": 1702000000000i64
            },
            {
                "encounter_completed": {
                    "encounter": { "id": 663, "name": "Lucifron" },
                    "mode": { "type": "NORMAL", "name": "Normal" }
                },
                "activity": { "type": "ENCOUNTER" },
                "timestamp": 1703000000000i64
            }
        ]
    })
}

/// Guild crest component media payload (emblem or border).
pub fn crest_media(kind: &str, id: u32) -> Value {
    json!({
        "id": id,
        "assets": [
            {
                "key": "image",
                "value": format!("https://render.worldofwarcraft.com/classic-us/guild/tabards/{}_{}.png", kind, id),
                "file_data_id": 100 + id
            }
        ]
    })
}

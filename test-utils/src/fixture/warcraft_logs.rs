//! WarcraftLogs GraphQL API v2 payloads.

use serde_json::{json, Value};

/// Single fight entry.
///
/// # Arguments
/// - `name` - Encounter name
/// - `kill` - `Some(true)` boss kill, `Some(false)` wipe, `None` trash
/// - `fight_percentage` - Boss health remaining at the end of the fight, if any
pub fn fight(name: &str, kill: Option<bool>, fight_percentage: Option<f64>) -> Value {
    json!({
        "id": 1,
        "name": name,
        "encounterID": if kill.is_some() { 663 } else { 0 },
        "kill": kill,
        "fightPercentage": fight_percentage,
        "startTime": 0,
        "endTime": 120000
    })
}

/// Single report entry.
///
/// # Arguments
/// - `code` - Report code
/// - `zone` - Zone (raid) name
/// - `start_time` - Report start in epoch milliseconds
/// - `fights` - Fights recorded in the report
pub fn report(code: &str, zone: &str, start_time: i64, fights: Vec<Value>) -> Value {
    json!({
        "code": code,
        "title": format!("{} clear", zone),
        "startTime": start_time,
        "endTime": start_time + 7_200_000,
        "zone": { "id": 1000, "name": zone },
        "fights": fights
    })
}

/// GraphQL response wrapping a guild's reports.
pub fn reports_response(reports: Vec<Value>) -> Value {
    json!({
        "data": {
            "reportData": {
                "reports": {
                    "data": reports,
                    "total": 1,
                    "per_page": 10,
                    "current_page": 1,
                    "has_more_pages": false
                }
            }
        }
    })
}

/// Single guild member entry.
///
/// # Arguments
/// - `name` - Character name
/// - `class_id` - WarcraftLogs class id
/// - `level` - Character level
/// - `rank` - Guild rank index
pub fn guild_member(name: &str, class_id: u32, level: u32, rank: u32) -> Value {
    json!({
        "id": 9000 + class_id,
        "name": name,
        "classID": class_id,
        "level": level,
        "guildRank": rank,
        "server": { "name": "Pyrewood Village", "slug": "pyrewood-village" }
    })
}

/// GraphQL response wrapping a guild's member list.
pub fn guild_members_response(members: Vec<Value>) -> Value {
    json!({
        "data": {
            "guildData": {
                "guild": {
                    "name": "Nose Beers But No Gear",
                    "members": { "data": members, "has_more_pages": false }
                }
            }
        }
    })
}

/// GraphQL error response delivered with a 200 status.
pub fn graphql_error(message: &str) -> Value {
    json!({
        "errors": [
            { "message": message, "locations": [{ "line": 2, "column": 3 }], "path": ["reportData"] }
        ],
        "data": null
    })
}

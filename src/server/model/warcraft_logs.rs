//! WarcraftLogs GraphQL API v2 contracts.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::raid::{LogsMemberDto, RaidLogDto},
    server::model::lookup::warcraft_logs_class_name,
};

/// Top-level GraphQL response. `errors` may accompany a 200 status.
#[derive(Deserialize, Debug)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportsData {
    pub report_data: ReportData,
}

#[derive(Deserialize, Debug)]
pub struct ReportData {
    pub reports: ReportPage,
}

#[derive(Deserialize, Debug)]
pub struct ReportPage {
    #[serde(default)]
    pub data: Vec<Report>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub code: String,
    pub title: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    #[serde(default)]
    pub zone: Option<Zone>,
    #[serde(default)]
    pub fights: Vec<Fight>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Zone {
    pub name: String,
}

/// One encounter attempt. `kill` is absent/null for trash fights.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    #[serde(default)]
    pub kill: Option<bool>,
    /// Boss health remaining when the fight ended, 0..=100.
    #[serde(default)]
    pub fight_percentage: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GuildMembersData {
    pub guild_data: GuildData,
}

#[derive(Deserialize, Debug)]
pub struct GuildData {
    /// Null when the guild is unknown to WarcraftLogs.
    pub guild: Option<LogsGuild>,
}

#[derive(Deserialize, Debug)]
pub struct LogsGuild {
    pub members: MemberPage,
}

#[derive(Deserialize, Debug)]
pub struct MemberPage {
    #[serde(default)]
    pub data: Vec<LogsMember>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LogsMember {
    pub name: String,
    #[serde(rename = "classID")]
    pub class_id: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub guild_rank: u32,
    pub server: Server,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Server {
    pub slug: String,
}

/// Counts boss kills and wipes. Fights whose `kill` is null are trash and count as neither.
pub fn count_kills_and_wipes(fights: &[Fight]) -> (u32, u32) {
    fights
        .iter()
        .fold((0, 0), |(kills, wipes), fight| match fight.kill {
            Some(true) => (kills + 1, wipes),
            Some(false) => (kills, wipes + 1),
            None => (kills, wipes),
        })
}

/// Best boss progress in a report as a percentage.
///
/// # Returns
/// - `Some(100.0)` - At least one boss was killed
/// - `Some(p)` - No kills; `p` is 100 minus the lowest boss health any wipe reached
/// - `None` - No boss fights, or wipes without a reported percentage
pub fn best_performance(fights: &[Fight]) -> Option<f64> {
    if fights.iter().any(|fight| fight.kill == Some(true)) {
        return Some(100.0);
    }

    fights
        .iter()
        .filter(|fight| fight.kill == Some(false))
        .filter_map(|fight| fight.fight_percentage)
        .min_by(|a, b| a.total_cmp(b))
        .map(|remaining| 100.0 - remaining)
}

impl Report {
    pub fn into_dto(self) -> RaidLogDto {
        let (kills, wipes) = count_kills_and_wipes(&self.fights);

        RaidLogDto {
            best_performance: best_performance(&self.fights),
            raid: self
                .zone
                .map(|zone| zone.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            date: DateTime::from_timestamp_millis(self.start_time),
            code: self.code,
            title: self.title,
            kills,
            wipes,
        }
    }
}

impl LogsMember {
    pub fn into_dto(self) -> LogsMemberDto {
        LogsMemberDto {
            class: warcraft_logs_class_name(self.class_id).to_string(),
            name: self.name,
            realm: self.server.slug,
            level: self.level,
            rank_index: self.guild_rank,
        }
    }
}

use crate::server::{
    data::blizzard::{BlizzardClient, Namespace},
    error::AppError,
    model::{
        blizzard::{Guild, GuildAchievements, GuildActivity, GuildRoster},
        target::GuildTarget,
    },
};

impl BlizzardClient {
    /// Fetches the guild summary from `/data/wow/guild/{realm}/{name}`.
    pub async fn guild(&self, target: &GuildTarget) -> Result<Guild, AppError> {
        self.get(&guild_path(target, None), Namespace::Profile)
            .await
    }

    /// Fetches the guild member list.
    pub async fn guild_roster(&self, target: &GuildTarget) -> Result<GuildRoster, AppError> {
        self.get(&guild_path(target, Some("roster")), Namespace::Profile)
            .await
    }

    /// Fetches achievement totals and the most recent completions.
    pub async fn guild_achievements(
        &self,
        target: &GuildTarget,
    ) -> Result<GuildAchievements, AppError> {
        self.get(&guild_path(target, Some("achievements")), Namespace::Profile)
            .await
    }

    /// Fetches the recent guild activity feed.
    pub async fn guild_activity(&self, target: &GuildTarget) -> Result<GuildActivity, AppError> {
        self.get(&guild_path(target, Some("activity")), Namespace::Profile)
            .await
    }
}

fn guild_path<'a>(target: &'a GuildTarget, resource: Option<&'a str>) -> Vec<&'a str> {
    let mut segments = vec![
        "data",
        "wow",
        "guild",
        target.realm_slug.as_str(),
        target.name_slug.as_str(),
    ];
    segments.extend(resource);
    segments
}

use dioxus_logger::tracing;

use crate::{
    model::guild::{GuildAchievementsDto, GuildActivityDto, GuildCrestDto, GuildInfoDto},
    server::{
        config::GuildConfig,
        data::blizzard::{media::CrestLayer, BlizzardClient},
        error::AppError,
        model::{
            blizzard::{ActivityEntry, MediaAssets},
            target::GuildTarget,
        },
    },
};

pub struct GuildService<'a> {
    blizzard: &'a BlizzardClient,
    guild: &'a GuildConfig,
}

impl<'a> GuildService<'a> {
    pub fn new(blizzard: &'a BlizzardClient, guild: &'a GuildConfig) -> Self {
        Self { blizzard, guild }
    }

    /// Gets the guild summary with the configured description
    pub async fn info(&self, target: &GuildTarget) -> Result<GuildInfoDto, AppError> {
        let guild = self.blizzard.guild(target).await?;

        Ok(guild.into_dto(self.guild.description.clone().unwrap_or_default()))
    }

    /// Gets achievement totals and recent completions
    pub async fn achievements(&self, target: &GuildTarget) -> Result<GuildAchievementsDto, AppError> {
        let achievements = self.blizzard.guild_achievements(target).await?;

        Ok(achievements.into_dto())
    }

    /// Gets the recent activity feed in upstream order
    pub async fn activity(&self, target: &GuildTarget) -> Result<Vec<GuildActivityDto>, AppError> {
        let activity = self.blizzard.guild_activity(target).await?;

        Ok(activity
            .activities
            .into_iter()
            .map(ActivityEntry::into_dto)
            .collect())
    }

    /// Gets the guild crest with emblem and border images resolved.
    ///
    /// The two media lookups run concurrently. A layer whose media cannot be fetched is
    /// returned without an image rather than failing the whole crest.
    ///
    /// # Returns
    /// - `Ok(GuildCrestDto)` - Crest ids, colors and image URLs where available
    /// - `Err(AppError::NotFound)` - The guild has no crest
    /// - `Err(AppError::UpstreamErr)` - The guild itself could not be fetched
    pub async fn crest(&self, target: &GuildTarget) -> Result<GuildCrestDto, AppError> {
        let guild = self.blizzard.guild(target).await?;
        let crest = guild
            .crest
            .ok_or_else(|| AppError::NotFound(format!("Guild {} has no crest", guild.name)))?;

        let (emblem, border) = tokio::join!(
            self.blizzard
                .guild_crest_media(CrestLayer::Emblem, crest.emblem.id),
            self.blizzard
                .guild_crest_media(CrestLayer::Border, crest.border.id),
        );

        Ok(crest.to_dto(
            layer_image(CrestLayer::Emblem, emblem),
            layer_image(CrestLayer::Border, border),
        ))
    }
}

fn layer_image(
    layer: CrestLayer,
    media: Result<MediaAssets, AppError>,
) -> Option<String> {
    match media {
        Ok(media) => media.asset("image"),
        Err(err) => {
            tracing::warn!("Failed to fetch guild crest {}: {}", layer.as_str(), err);
            None
        }
    }
}

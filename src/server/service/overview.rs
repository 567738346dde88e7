use dioxus_logger::tracing;

use crate::{
    model::overview::{DataSource, OverviewDto, OverviewSourcesDto},
    server::{
        config::GuildConfig,
        data::{blizzard::BlizzardClient, warcraft_logs::WarcraftLogsClient},
        error::AppError,
        model::target::GuildTarget,
        service::{fallback, guild::GuildService, raid_log::RaidLogService, roster::RosterService},
    },
};

/// Number of reports shown on the overview.
pub const OVERVIEW_LOG_LIMIT: u32 = 5;

pub struct OverviewService<'a> {
    blizzard: &'a BlizzardClient,
    warcraft_logs: &'a WarcraftLogsClient,
    guild: &'a GuildConfig,
}

impl<'a> OverviewService<'a> {
    pub fn new(
        blizzard: &'a BlizzardClient,
        warcraft_logs: &'a WarcraftLogsClient,
        guild: &'a GuildConfig,
    ) -> Self {
        Self {
            blizzard,
            warcraft_logs,
            guild,
        }
    }

    /// Builds the landing page data.
    ///
    /// Guild summary, roster and recent logs are fetched concurrently. Each section that
    /// fails, for any reason including missing configuration, is replaced by fallback data
    /// and marked as such in `sources`; this method never fails.
    ///
    /// # Arguments
    /// - `target` - Resolved guild, or the error resolving it produced
    pub async fn overview(&self, target: Result<GuildTarget, AppError>) -> OverviewDto {
        let target = match target {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!("Serving fallback overview: {}", err);
                return self.fallback_overview();
            }
        };

        let guild_service = GuildService::new(self.blizzard, self.guild);
        let roster_service = RosterService::new(self.blizzard, self.guild);
        let raid_log_service = RaidLogService::new(self.warcraft_logs);

        let (guild, members, raid_logs) = tokio::join!(
            guild_service.info(&target),
            roster_service.roster(&target),
            raid_log_service.recent_logs(&target, OVERVIEW_LOG_LIMIT),
        );

        let (guild, guild_source) = or_fallback("guild", guild, || fallback::guild_info(self.guild));
        let (members, members_source) =
            or_fallback("roster", members, || fallback::members(self.guild));
        let (raid_logs, raid_logs_source) = or_fallback("raid logs", raid_logs, fallback::raid_logs);

        OverviewDto {
            guild,
            members,
            raid_logs,
            sources: OverviewSourcesDto {
                guild: guild_source,
                members: members_source,
                raid_logs: raid_logs_source,
            },
        }
    }

    fn fallback_overview(&self) -> OverviewDto {
        OverviewDto {
            guild: fallback::guild_info(self.guild),
            members: fallback::members(self.guild),
            raid_logs: fallback::raid_logs(),
            sources: OverviewSourcesDto {
                guild: DataSource::Fallback,
                members: DataSource::Fallback,
                raid_logs: DataSource::Fallback,
            },
        }
    }
}

fn or_fallback<T>(
    section: &str,
    result: Result<T, AppError>,
    fallback: impl FnOnce() -> T,
) -> (T, DataSource) {
    match result {
        Ok(value) => (value, DataSource::Live),
        Err(err) => {
            tracing::warn!("Serving fallback {}: {}", section, err);
            (fallback(), DataSource::Fallback)
        }
    }
}

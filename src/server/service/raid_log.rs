use crate::{
    model::raid::{LogsMemberDto, RaidLogDto},
    server::{
        data::warcraft_logs::WarcraftLogsClient,
        error::AppError,
        model::{
            target::GuildTarget,
            warcraft_logs::{LogsMember, Report},
        },
    },
};

/// Number of reports returned when the caller does not ask for a count.
pub const DEFAULT_LOG_LIMIT: u32 = 10;

/// Largest number of reports one request may ask for.
pub const MAX_LOG_LIMIT: u32 = 25;

pub struct RaidLogService<'a> {
    warcraft_logs: &'a WarcraftLogsClient,
}

impl<'a> RaidLogService<'a> {
    pub fn new(warcraft_logs: &'a WarcraftLogsClient) -> Self {
        Self { warcraft_logs }
    }

    /// Gets the guild's most recent raid reports with kill and wipe counts.
    ///
    /// # Arguments
    /// - `target` - Guild to list reports for
    /// - `limit` - Number of reports, clamped to `1..=MAX_LOG_LIMIT`
    pub async fn recent_logs(
        &self,
        target: &GuildTarget,
        limit: u32,
    ) -> Result<Vec<RaidLogDto>, AppError> {
        let reports = self
            .warcraft_logs
            .guild_reports(target, limit.clamp(1, MAX_LOG_LIMIT))
            .await?;

        Ok(reports.into_iter().map(Report::into_dto).collect())
    }

    /// Gets the guild members WarcraftLogs has seen in logged fights
    pub async fn members(&self, target: &GuildTarget) -> Result<Vec<LogsMemberDto>, AppError> {
        let members = self.warcraft_logs.guild_members(target).await?;

        Ok(members.into_iter().map(LogsMember::into_dto).collect())
    }
}

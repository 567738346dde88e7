use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{guild::GuildInfoDto, member::MemberDto, raid::RaidLogDto};

/// Everything the landing page needs in one response. Each section is filled from the
/// upstream services when possible and from static placeholder data otherwise.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    pub guild: GuildInfoDto,
    pub members: Vec<MemberDto>,
    pub raid_logs: Vec<RaidLogDto>,
    pub sources: OverviewSourcesDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSourcesDto {
    pub guild: DataSource,
    pub members: DataSource,
    pub raid_logs: DataSource,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

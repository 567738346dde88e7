use test_utils::{builder::TestBuilder, fixture};

use super::{app_state, guild_target};
use crate::server::{error::AppError, service::raid_log::RaidLogService};

mod recent_logs;

const GRAPHQL_PATH: &str = "/api/v2/client";

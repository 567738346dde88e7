use axum::http::StatusCode;
use serde_json::json;
use test_utils::{builder::TestBuilder, fixture};

use super::{app_state, guild_target, GUILD_PATH};
use crate::server::{error::AppError, service::guild::GuildService};

mod info;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use test_utils::{builder::TestBuilder, fixture};

use super::{app_state, app_state_for, body_json, GUILD_PATH};
use crate::server::{
    config::Config,
    controller::{overview::get_overview, param::GuildParams},
};

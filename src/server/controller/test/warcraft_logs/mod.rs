use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use test_utils::{builder::TestBuilder, fixture};

use super::{app_state, body_json};
use crate::server::{
    controller::{
        param::{GuildParams, LogsParams},
        warcraft_logs::{get_logs, get_members, log_limit},
    },
    error::AppError,
};

mod logs;

const GRAPHQL_PATH: &str = "/api/v2/client";

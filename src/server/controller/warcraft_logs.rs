use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        raid::{LogsMemberDto, RaidLogDto},
    },
    server::{
        controller::param::{optional_parsed, GuildParams, LogsParams},
        error::AppError,
        model::target::GuildTarget,
        service::raid_log::{RaidLogService, DEFAULT_LOG_LIMIT, MAX_LOG_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping WarcraftLogs endpoints in OpenAPI documentation
pub static WARCRAFT_LOGS_TAG: &str = "warcraft-logs";

/// Validates the requested report count.
///
/// # Returns
/// - `Ok(limit)` - The requested count, or `DEFAULT_LOG_LIMIT` when absent
/// - `Err(AppError::BadRequest)` - Not a number or outside `1..=MAX_LOG_LIMIT`
pub fn log_limit(limit: Option<String>) -> Result<u32, AppError> {
    match optional_parsed::<u32>("limit", limit)? {
        None => Ok(DEFAULT_LOG_LIMIT),
        Some(limit) if (1..=MAX_LOG_LIMIT).contains(&limit) => Ok(limit),
        Some(limit) => Err(AppError::BadRequest(format!(
            "Query parameter 'limit' must be between 1 and {}, got {}",
            MAX_LOG_LIMIT, limit
        ))),
    }
}

/// Get the guild's recent raid reports.
///
/// Each report carries its zone, start date, boss kill and wipe counts and the best boss
/// progress reached.
///
/// # Arguments
/// - `state` - Application state containing the WarcraftLogs client
/// - `params` - Optional guild override and report count
///
/// # Returns
/// - `200 OK` - Reports, newest first
/// - `400 Bad Request` - Invalid `limit`
/// - `500 Internal Server Error` - Guild or credentials not configured
/// - `502 Bad Gateway` - WarcraftLogs API failure or GraphQL error
#[utoipa::path(
    get,
    path = "/api/warcraft-logs",
    tag = WARCRAFT_LOGS_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME"),
        ("limit" = Option<u32>, Query, description = "Number of reports, 1 to 25, default 10")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reports", body = Vec<RaidLogDto>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "WarcraftLogs API failure", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    Query(params): Query<LogsParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = log_limit(params.limit)?;
    let target = GuildTarget::resolve(&state.config.guild, params.realm, params.name)?;

    let logs = RaidLogService::new(&state.warcraft_logs)
        .recent_logs(&target, limit)
        .await?;

    Ok((StatusCode::OK, Json(logs)))
}

/// Get the guild members WarcraftLogs knows about.
#[utoipa::path(
    get,
    path = "/api/warcraft-logs/members",
    tag = WARCRAFT_LOGS_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<LogsMemberDto>),
        (status = 404, description = "Guild unknown to WarcraftLogs", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "WarcraftLogs API failure", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = GuildTarget::resolve(&state.config.guild, params.realm, params.name)?;

    let members = RaidLogService::new(&state.warcraft_logs)
        .members(&target)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

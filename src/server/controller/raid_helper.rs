use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{
        controller::param::EventParams,
        error::AppError,
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping Raid-Helper endpoints in OpenAPI documentation
pub static RAID_HELPER_TAG: &str = "raid-helper";

/// Get scheduled raid events.
///
/// Fetches every page of the configured Discord server's Raid-Helper events and merges
/// them into one listing. When Raid-Helper cannot be reached or answers with an error, a
/// placeholder listing with `fallback: true` is returned instead.
///
/// # Arguments
/// - `state` - Application state containing the Raid-Helper client
/// - `params` - Optional channel, time window and sign-up filters
///
/// # Returns
/// - `200 OK` - Live or fallback events
/// - `400 Bad Request` - Malformed filter value
/// - `500 Internal Server Error` - Server id or API key not configured
#[utoipa::path(
    get,
    path = "/api/raid-helper",
    tag = RAID_HELPER_TAG,
    params(
        ("channelId" = Option<String>, Query, description = "Only events posted in this channel"),
        ("startTime" = Option<i64>, Query, description = "Only events starting after this epoch second"),
        ("endTime" = Option<i64>, Query, description = "Only events starting before this epoch second"),
        ("includeSignUps" = Option<bool>, Query, description = "Include sign-ups in each event")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events"),
        (status = 400, description = "Malformed filter value", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<EventParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = params.into_filter()?;

    let events = EventService::new(&state.raid_helper).events(&filter).await?;

    Ok((StatusCode::OK, Json(events)))
}

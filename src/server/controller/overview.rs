use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::overview::OverviewDto,
    server::{
        controller::param::GuildParams, model::target::GuildTarget,
        service::overview::OverviewService, state::AppState,
    },
};

/// Tag for grouping the overview endpoint in OpenAPI documentation
pub static OVERVIEW_TAG: &str = "overview";

/// Get the landing page data.
///
/// Combines the guild summary, the roster without item levels and the five most recent raid
/// reports. A section that cannot be fetched is replaced by placeholder data and marked
/// `fallback` in `sources`, so this endpoint always answers 200.
#[utoipa::path(
    get,
    path = "/api/overview",
    tag = OVERVIEW_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Overview with per-section data sources", body = OverviewDto)
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> impl IntoResponse {
    let target = GuildTarget::resolve(&state.config.guild, params.realm, params.name);

    let overview = OverviewService::new(
        &state.blizzard,
        &state.warcraft_logs,
        &state.config.guild,
    )
    .overview(target)
    .await;

    (StatusCode::OK, Json(overview))
}

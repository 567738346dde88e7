use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{blizzard, overview, raid_helper, warcraft_logs},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guild site API", description = "Guild data aggregated from Blizzard, WarcraftLogs and Raid-Helper"),
    tags(
        (name = "blizzard", description = "Guild and character data from the Blizzard API"),
        (name = "warcraft-logs", description = "Raid reports from WarcraftLogs"),
        (name = "raid-helper", description = "Scheduled events from Raid-Helper"),
        (name = "overview", description = "Landing page data with fallback")
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI at `/api/docs`.
///
/// # Arguments
/// - `config` - Application configuration; `APP_URL` restricts CORS to the site's origin
///
/// # Returns
/// - `Ok(Router)` - Router awaiting application state
/// - `Err(AppError::ConfigErr)` - `APP_URL` is not a valid origin header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(blizzard::get_guild))
        .routes(routes!(blizzard::get_roster))
        .routes(routes!(blizzard::get_achievements))
        .routes(routes!(blizzard::get_activity))
        .routes(routes!(blizzard::get_equipment))
        .routes(routes!(blizzard::get_item_media))
        .routes(routes!(blizzard::get_avatar))
        .routes(routes!(blizzard::get_character_profile))
        .routes(routes!(blizzard::get_guild_crest))
        .routes(routes!(blizzard::get_roster_with_item_level))
        .routes(routes!(raid_helper::get_events))
        .routes(routes!(warcraft_logs::get_logs))
        .routes(routes!(warcraft_logs::get_members))
        .routes(routes!(overview::get_overview))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors_layer(config.app_url.as_deref())?);

    Ok(router)
}

/// Allows `GET` from the site's origin, or from anywhere when `APP_URL` is unset.
fn cors_layer(app_url: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let cors = CorsLayer::new().allow_methods([Method::GET]);

    match app_url {
        Some(app_url) => {
            let origin = HeaderValue::from_str(app_url.trim_end_matches('/')).map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "APP_URL".to_string(),
                    value: app_url.to_string(),
                    reason: e.to_string(),
                }
            })?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}

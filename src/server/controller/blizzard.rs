use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterMediaDto, EquipmentDto, ItemMediaDto},
        guild::{GuildAchievementsDto, GuildActivityDto, GuildCrestDto, GuildInfoDto},
        member::MemberDto,
    },
    server::{
        controller::param::{required_parsed, CharacterParams, GuildParams, ItemMediaParams},
        error::AppError,
        model::target::GuildTarget,
        service::{character::CharacterService, guild::GuildService, roster::RosterService},
        state::AppState,
    },
};

/// Tag for grouping Blizzard endpoints in OpenAPI documentation
pub static BLIZZARD_TAG: &str = "blizzard";

fn guild_target(state: &AppState, params: GuildParams) -> Result<GuildTarget, AppError> {
    GuildTarget::resolve(&state.config.guild, params.realm, params.name)
}

/// Get the guild summary.
///
/// Returns name, realm, faction, creation date, member count and achievement points of the
/// configured guild, or of the guild named by the optional `realm` and `name` parameters.
///
/// # Arguments
/// - `state` - Application state containing the Blizzard client
/// - `params` - Optional guild override
///
/// # Returns
/// - `200 OK` - Guild summary
/// - `404 Not Found` - Blizzard does not know the guild
/// - `500 Internal Server Error` - Guild or credentials not configured
/// - `502 Bad Gateway` - Blizzard API failure
#[utoipa::path(
    get,
    path = "/api/blizzard/guild",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild", body = GuildInfoDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = guild_target(&state, params)?;

    let guild = GuildService::new(&state.blizzard, &state.config.guild)
        .info(&target)
        .await?;

    Ok((StatusCode::OK, Json(guild)))
}

/// Get the guild roster.
///
/// Returns every member with class, race, rank and class icon. Item levels are not looked
/// up and are reported as 0; use `/api/blizzard/roster-with-ilvl` for those.
///
/// # Returns
/// - `200 OK` - Members in roster order
/// - `404 Not Found` - Blizzard does not know the guild
/// - `500 Internal Server Error` - Guild or credentials not configured
/// - `502 Bad Gateway` - Blizzard API failure
#[utoipa::path(
    get,
    path = "/api/blizzard/roster",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved roster", body = Vec<MemberDto>),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = guild_target(&state, params)?;

    let members = RosterService::new(&state.blizzard, &state.config.guild)
        .roster(&target)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Get the guild roster with item levels.
///
/// Looks up every member's profile, five at a time, and fills in the average item level
/// and its tier. Members whose profile cannot be fetched are returned with item level 0.
///
/// # Returns
/// - `200 OK` - Members in roster order with item levels
/// - `404 Not Found` - Blizzard does not know the guild
/// - `500 Internal Server Error` - Guild or credentials not configured
/// - `502 Bad Gateway` - The roster could not be fetched
#[utoipa::path(
    get,
    path = "/api/blizzard/roster-with-ilvl",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved enriched roster", body = Vec<MemberDto>),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_roster_with_item_level(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = guild_target(&state, params)?;

    let members = RosterService::new(&state.blizzard, &state.config.guild)
        .roster_with_item_level(&target)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Get guild achievement totals and recent completions.
#[utoipa::path(
    get,
    path = "/api/blizzard/achievements",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved achievements", body = GuildAchievementsDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = guild_target(&state, params)?;

    let achievements = GuildService::new(&state.blizzard, &state.config.guild)
        .achievements(&target)
        .await?;

    Ok((StatusCode::OK, Json(achievements)))
}

/// Get the guild activity feed.
#[utoipa::path(
    get,
    path = "/api/blizzard/activity",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved activity", body = Vec<GuildActivityDto>),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = guild_target(&state, params)?;

    let activity = GuildService::new(&state.blizzard, &state.config.guild)
        .activity(&target)
        .await?;

    Ok((StatusCode::OK, Json(activity)))
}

/// Get the guild crest.
///
/// Returns emblem and border ids with their image URLs and colors, plus the background
/// color. A layer whose image cannot be fetched is returned without `imageUrl`.
///
/// # Returns
/// - `200 OK` - Crest layers
/// - `404 Not Found` - Guild not found or has no crest
/// - `500 Internal Server Error` - Guild or credentials not configured
/// - `502 Bad Gateway` - Blizzard API failure
#[utoipa::path(
    get,
    path = "/api/blizzard/guild-crest",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name, defaults to GUILD_REALM"),
        ("name" = Option<String>, Query, description = "Guild name, defaults to GUILD_NAME")
    ),
    responses(
        (status = 200, description = "Successfully retrieved crest", body = GuildCrestDto),
        (status = 404, description = "Guild or crest not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_guild_crest(
    State(state): State<AppState>,
    Query(params): Query<GuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = guild_target(&state, params)?;

    let crest = GuildService::new(&state.blizzard, &state.config.guild)
        .crest(&target)
        .await?;

    Ok((StatusCode::OK, Json(crest)))
}

/// Get a character's equipped items.
///
/// # Arguments
/// - `state` - Application state containing the Blizzard client
/// - `params` - `realm` and `character`, both required
///
/// # Returns
/// - `200 OK` - Items keyed by slot type
/// - `400 Bad Request` - `realm` or `character` missing
/// - `404 Not Found` - Character not found
/// - `500 Internal Server Error` - Credentials not configured
/// - `502 Bad Gateway` - Blizzard API failure
#[utoipa::path(
    get,
    path = "/api/blizzard/equipment",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = String, Query, description = "Character realm"),
        ("character" = String, Query, description = "Character name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved equipment", body = EquipmentDto),
        (status = 400, description = "Missing query parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Query(params): Query<CharacterParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = params.into_target()?;

    let equipment = CharacterService::new(&state.blizzard)
        .equipment(&target)
        .await?;

    Ok((StatusCode::OK, Json(equipment)))
}

/// Get an item's icon.
///
/// # Returns
/// - `200 OK` - Icon URL, absent when Blizzard has none
/// - `400 Bad Request` - `itemId` missing or not a number
/// - `404 Not Found` - Item not found
/// - `500 Internal Server Error` - Credentials not configured
/// - `502 Bad Gateway` - Blizzard API failure
#[utoipa::path(
    get,
    path = "/api/blizzard/item-media",
    tag = BLIZZARD_TAG,
    params(
        ("itemId" = u64, Query, description = "Item id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item media", body = ItemMediaDto),
        (status = 400, description = "Missing or invalid itemId", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_item_media(
    State(state): State<AppState>,
    Query(params): Query<ItemMediaParams>,
) -> Result<impl IntoResponse, AppError> {
    let item_id: u64 = required_parsed("itemId", params.item_id)?;

    let media = CharacterService::new(&state.blizzard)
        .item_media(item_id)
        .await?;

    Ok((StatusCode::OK, Json(media)))
}

/// Get a character's avatar, inset and full-body renders.
#[utoipa::path(
    get,
    path = "/api/blizzard/avatar",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = String, Query, description = "Character realm"),
        ("character" = String, Query, description = "Character name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character media", body = CharacterMediaDto),
        (status = 400, description = "Missing query parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_avatar(
    State(state): State<AppState>,
    Query(params): Query<CharacterParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = params.into_target()?;

    let media = CharacterService::new(&state.blizzard).avatar(&target).await?;

    Ok((StatusCode::OK, Json(media)))
}

/// Get a character profile.
///
/// The Blizzard profile is validated for `name` and `level` and otherwise returned as
/// Blizzard sent it.
///
/// # Returns
/// - `200 OK` - Character profile
/// - `400 Bad Request` - `realm` or `character` missing
/// - `404 Not Found` - Character not found
/// - `500 Internal Server Error` - Credentials not configured
/// - `502 Bad Gateway` - Blizzard API failure or unexpected payload
#[utoipa::path(
    get,
    path = "/api/blizzard/character-profile",
    tag = BLIZZARD_TAG,
    params(
        ("realm" = String, Query, description = "Character realm"),
        ("character" = String, Query, description = "Character name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character profile"),
        (status = 400, description = "Missing query parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Configuration error", body = ErrorDto),
        (status = 502, description = "Blizzard API failure", body = ErrorDto)
    ),
)]
pub async fn get_character_profile(
    State(state): State<AppState>,
    Query(params): Query<CharacterParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = params.into_target()?;

    let profile = CharacterService::new(&state.blizzard)
        .profile(&target)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

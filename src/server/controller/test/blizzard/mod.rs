use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, fixture};

use super::{app_state, app_state_for, body_json, GUILD_PATH};
use crate::server::{
    config::Config,
    controller::{
        blizzard::{get_equipment, get_guild, get_item_media, get_roster},
        param::{CharacterParams, GuildParams, ItemMediaParams},
    },
};

mod character;
mod guild;

const EQUIPMENT_PATH: &str = "/profile/wow/character/pyrewood-village/thrall/equipment";

fn thrall() -> CharacterParams {
    CharacterParams {
        realm: Some("Pyrewood Village".to_string()),
        character: Some("Thrall".to_string()),
    }
}

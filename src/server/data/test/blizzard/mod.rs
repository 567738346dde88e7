use axum::http::StatusCode;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, fixture};

use crate::server::{
    config::{Config, GameVersion},
    data::blizzard::{media::CrestLayer, BlizzardClient, Namespace},
    error::{upstream::UpstreamError, AppError},
    model::target::{CharacterTarget, GuildTarget},
    startup::setup_reqwest_client,
};

mod character;
mod namespace;

const GUILD_PATH: &str = "/data/wow/guild/pyrewood-village/nose-beers-but-no-gear";
const CHARACTER_PATH: &str = "/profile/wow/character/pyrewood-village/thrall";

fn client(test: &TestContext) -> BlizzardClient {
    client_for(&Config::for_mock(&test.base_url))
}

fn client_for(config: &Config) -> BlizzardClient {
    BlizzardClient::new(config, setup_reqwest_client().unwrap()).unwrap()
}

fn guild_target(test: &TestContext) -> GuildTarget {
    let config = Config::for_mock(&test.base_url);
    GuildTarget::resolve(&config.guild, None, None).unwrap()
}

fn thrall() -> CharacterTarget {
    CharacterTarget::new("Pyrewood Village", "Thrall")
}

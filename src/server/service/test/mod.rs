use test_utils::context::TestContext;

use crate::server::{
    config::Config, model::target::GuildTarget, startup::setup_reqwest_client, state::AppState,
};

mod guild;
mod raid_log;

const GUILD_PATH: &str = "/data/wow/guild/pyrewood-village/nose-beers-but-no-gear";

fn app_state(test: &TestContext) -> AppState {
    app_state_for(Config::for_mock(&test.base_url))
}

fn app_state_for(config: Config) -> AppState {
    AppState::new(config, setup_reqwest_client().unwrap()).unwrap()
}

fn guild_target(state: &AppState) -> GuildTarget {
    GuildTarget::resolve(&state.config.guild, None, None).unwrap()
}

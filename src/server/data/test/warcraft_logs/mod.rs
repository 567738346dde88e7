use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, fixture};

use crate::server::{
    config::Config,
    data::warcraft_logs::WarcraftLogsClient,
    error::{upstream::UpstreamError, AppError},
    model::target::GuildTarget,
    startup::setup_reqwest_client,
};


const GRAPHQL_PATH: &str = "/api/v2/client";

fn client(test: &TestContext) -> WarcraftLogsClient {
    WarcraftLogsClient::new(
        &Config::for_mock(&test.base_url),
        setup_reqwest_client().unwrap(),
    )
    .unwrap()
}

fn guild_target(test: &TestContext) -> GuildTarget {
    let config = Config::for_mock(&test.base_url);
    GuildTarget::resolve(&config.guild, None, None).unwrap()
}

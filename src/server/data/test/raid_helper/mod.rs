use axum::http::StatusCode;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, fixture};

use crate::server::{
    config::Config,
    data::raid_helper::RaidHelperClient,
    error::{config::ConfigError, upstream::UpstreamError, AppError},
    model::raid_helper::EventFilter,
    startup::setup_reqwest_client,
};

mod events;

const EVENTS_PATH: &str = "/servers/1234567890/events";

fn client(test: &TestContext) -> RaidHelperClient {
    client_for(&Config::for_mock(&test.base_url))
}

fn client_for(config: &Config) -> RaidHelperClient {
    RaidHelperClient::new(config, setup_reqwest_client().unwrap()).unwrap()
}

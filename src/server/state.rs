//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Configuration for the guild and the upstream services
//! - One client per upstream service, each owning its own token cache or API key

use std::sync::Arc;

use crate::server::{
    config::Config,
    data::{
        blizzard::BlizzardClient, raid_helper::RaidHelperClient,
        warcraft_logs::WarcraftLogsClient,
    },
    error::AppError,
};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `Arc<Config>` is a reference-counted pointer
/// - The upstream clients wrap a `reqwest::Client` (which uses an `Arc` internally) and an
///   `Arc`-backed token cache, so clones share cached tokens and in-flight refreshes
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Blizzard Game Data / Profile API client.
    pub blizzard: BlizzardClient,

    /// WarcraftLogs GraphQL API client.
    pub warcraft_logs: WarcraftLogsClient,

    /// Raid-Helper REST API client.
    pub raid_helper: RaidHelperClient,
}

impl AppState {
    /// Creates a new application state from configuration.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `http_client` - HTTP client shared by the upstream clients
    ///
    /// # Returns
    /// - `Ok(AppState)` - Initialized application state ready for use
    /// - `Err(AppError::ConfigErr)` - A configured upstream URL is malformed
    pub fn new(config: Config, http_client: reqwest::Client) -> Result<Self, AppError> {
        let blizzard = BlizzardClient::new(&config, http_client.clone())?;
        let warcraft_logs = WarcraftLogsClient::new(&config, http_client.clone())?;
        let raid_helper = RaidHelperClient::new(&config, http_client)?;

        Ok(Self {
            config: Arc::new(config),
            blizzard,
            warcraft_logs,
            raid_helper,
        })
    }
}

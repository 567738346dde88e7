//! Environment-based application configuration.
//!
//! Startup only fails on values that are present but malformed. Credentials and guild
//! identifiers are optional at startup: a missing one surfaces as a `ConfigError` on the
//! first request that needs it, which the site shows as a 500 with an explanatory message.

use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const BLIZZARD_TOKEN_URL: &str = "https://oauth.battle.net/token";
const RAID_HELPER_API_URL: &str = "https://raid-helper.dev/api/v3";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REGION: &str = "us";
const DEFAULT_LOCALE: &str = "en_US";

/// Rank names used when `GUILD_RANK_NAMES` is not set. Index 0 is the guild master.
const DEFAULT_RANK_NAMES: [&str; 10] = [
    "Guild Master",
    "Officer",
    "Officer Alt",
    "Core Raider",
    "Raider",
    "Trial",
    "Member",
    "Alt",
    "Social",
    "Initiate",
];

/// Game flavor the guild plays. Selects Blizzard namespaces and the WarcraftLogs host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameVersion {
    Retail,
    Classic,
    ClassicEra,
}

impl GameVersion {
    /// Namespace infix between the namespace kind and the region, e.g. `classic` in
    /// `profile-classic-us`.
    pub fn namespace_infix(&self) -> Option<&'static str> {
        match self {
            Self::Retail => None,
            Self::Classic => Some("classic"),
            Self::ClassicEra => Some("classic1x"),
        }
    }

    /// Base URL of the matching WarcraftLogs site.
    pub fn warcraft_logs_url(&self) -> &'static str {
        match self {
            Self::Retail => "https://www.warcraftlogs.com",
            Self::Classic => "https://classic.warcraftlogs.com",
            Self::ClassicEra => "https://vanilla.warcraftlogs.com",
        }
    }
}

impl FromStr for GameVersion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "retail" => Ok(Self::Retail),
            "classic" => Ok(Self::Classic),
            "classic-era" | "era" => Ok(Self::ClassicEra),
            _ => Err("expected one of retail, classic, classic-era".to_string()),
        }
    }
}

/// OAuth client id/secret pair read from the environment.
///
/// Either half may be missing; [`ServiceCredentials::require`] reports exactly which
/// variable is absent.
#[derive(Debug, Clone)]
pub struct ServiceCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub client_id_var: &'static str,
    pub client_secret_var: &'static str,
}

/// A complete credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ServiceCredentials {
    fn from_env(client_id_var: &'static str, client_secret_var: &'static str) -> Self {
        Self {
            client_id: optional_env(client_id_var),
            client_secret: optional_env(client_secret_var),
            client_id_var,
            client_secret_var,
        }
    }

    /// Returns the credential pair or the name of the first missing variable.
    pub fn require(&self) -> Result<ClientCredentials, ConfigError> {
        let client_id = self
            .client_id
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar(self.client_id_var.to_string()))?;
        let client_secret = self
            .client_secret
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar(self.client_secret_var.to_string()))?;

        Ok(ClientCredentials {
            client_id,
            client_secret,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

/// The guild the site is about.
#[derive(Debug, Clone)]
pub struct GuildConfig {
    pub name: Option<String>,
    pub realm: Option<String>,
    pub region: String,
    pub description: Option<String>,
    pub rank_names: Vec<String>,
}

impl GuildConfig {
    /// Display name of a guild rank index, falling back to `Rank N`.
    pub fn rank_name(&self, rank: u32) -> String {
        self.rank_names
            .get(rank as usize)
            .cloned()
            .unwrap_or_else(|| format!("Rank {}", rank))
    }
}

#[derive(Debug, Clone)]
pub struct BlizzardConfig {
    pub credentials: ServiceCredentials,
    pub api_url: String,
    pub token_url: String,
    pub locale: String,
}

#[derive(Debug, Clone)]
pub struct WarcraftLogsConfig {
    pub credentials: ServiceCredentials,
    pub api_url: String,
    pub token_url: String,
}

#[derive(Debug, Clone)]
pub struct RaidHelperConfig {
    pub server_id: Option<String>,
    pub api_key: Option<String>,
    pub api_url: String,
}

pub struct Config {
    pub bind_address: String,
    pub app_url: Option<String>,
    pub game_version: GameVersion,
    pub guild: GuildConfig,
    pub blizzard: BlizzardConfig,
    pub warcraft_logs: WarcraftLogsConfig,
    pub raid_helper: RaidHelperConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let region = optional_env("GUILD_REGION")
            .map(|r| r.to_lowercase())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let game_version = match optional_env("GAME_VERSION") {
            Some(value) => value
                .parse::<GameVersion>()
                .map_err(|reason| ConfigError::InvalidEnvVar {
                    name: "GAME_VERSION".to_string(),
                    value,
                    reason,
                })?,
            None => GameVersion::Classic,
        };

        let rank_names = optional_env("GUILD_RANK_NAMES")
            .map(|names| names.split(',').map(|n| n.trim().to_string()).collect())
            .unwrap_or_else(|| DEFAULT_RANK_NAMES.iter().map(|n| n.to_string()).collect());

        let logs_url = game_version.warcraft_logs_url();

        Ok(Self {
            bind_address: optional_env("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: optional_env("APP_URL"),
            game_version,
            guild: GuildConfig {
                name: optional_env("GUILD_NAME"),
                realm: optional_env("GUILD_REALM"),
                region: region.clone(),
                description: optional_env("GUILD_DESCRIPTION"),
                rank_names,
            },
            blizzard: BlizzardConfig {
                credentials: ServiceCredentials::from_env(
                    "BLIZZARD_CLIENT_ID",
                    "BLIZZARD_CLIENT_SECRET",
                ),
                api_url: format!("https://{}.api.blizzard.com", region),
                token_url: BLIZZARD_TOKEN_URL.to_string(),
                locale: optional_env("BLIZZARD_LOCALE")
                    .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            },
            warcraft_logs: WarcraftLogsConfig {
                credentials: ServiceCredentials::from_env(
                    "WARCRAFTLOGS_CLIENT_ID",
                    "WARCRAFTLOGS_CLIENT_SECRET",
                ),
                api_url: format!("{}/api/v2/client", logs_url),
                token_url: format!("{}/oauth/token", logs_url),
            },
            raid_helper: RaidHelperConfig {
                server_id: optional_env("RAID_HELPER_SERVER_ID"),
                api_key: optional_env("RAID_HELPER_API_KEY"),
                api_url: RAID_HELPER_API_URL.to_string(),
            },
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with every credential set and every upstream pointed at `base_url`,
    /// for use with the `test_utils` mock server.
    pub fn for_mock(base_url: &str) -> Self {
        let credentials = |id_var, secret_var| ServiceCredentials {
            client_id: Some("client-id".to_string()),
            client_secret: Some("client-secret".to_string()),
            client_id_var: id_var,
            client_secret_var: secret_var,
        };

        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            app_url: None,
            game_version: GameVersion::Classic,
            guild: GuildConfig {
                name: Some("Nose Beers But No Gear".to_string()),
                realm: Some("Pyrewood Village".to_string()),
                region: DEFAULT_REGION.to_string(),
                description: None,
                rank_names: DEFAULT_RANK_NAMES.iter().map(|n| n.to_string()).collect(),
            },
            blizzard: BlizzardConfig {
                credentials: credentials("BLIZZARD_CLIENT_ID", "BLIZZARD_CLIENT_SECRET"),
                api_url: base_url.to_string(),
                token_url: format!("{}/oauth/token", base_url),
                locale: DEFAULT_LOCALE.to_string(),
            },
            warcraft_logs: WarcraftLogsConfig {
                credentials: credentials("WARCRAFTLOGS_CLIENT_ID", "WARCRAFTLOGS_CLIENT_SECRET"),
                api_url: format!("{}/api/v2/client", base_url),
                token_url: format!("{}/oauth/token", base_url),
            },
            raid_helper: RaidHelperConfig {
                server_id: Some("1234567890".to_string()),
                api_key: Some("raid-helper-key".to_string()),
                api_url: base_url.to_string(),
            },
        }
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

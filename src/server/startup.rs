use dioxus_logger::tracing;
use std::time::Duration;

use crate::server::{config::Config, error::AppError};

/// Total time allowed for one upstream request, including reading the body.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the HTTP client shared by every upstream client.
///
/// Redirects are disabled; the OAuth token exchange must never follow one, and none of the
/// upstream APIs rely on them. A client-level timeout bounds every request since the clients
/// themselves set none.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(UPSTREAM_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Logs a warning for every upstream integration that is missing configuration.
///
/// The server still starts; requests that need the missing values answer with a 500
/// explaining which variable to set.
pub fn report_missing_credentials(config: &Config) {
    let credentials = [
        ("Blizzard", &config.blizzard.credentials),
        ("WarcraftLogs", &config.warcraft_logs.credentials),
    ];
    for (service, credentials) in credentials {
        if !credentials.is_complete() {
            tracing::warn!(
                "{} credentials not configured, set {} and {}",
                service,
                credentials.client_id_var,
                credentials.client_secret_var
            );
        }
    }

    if config.raid_helper.server_id.is_none() || config.raid_helper.api_key.is_none() {
        tracing::warn!(
            "Raid-Helper not configured, set RAID_HELPER_SERVER_ID and RAID_HELPER_API_KEY; \
             /api/raid-helper will answer 500"
        );
    }

    if config.guild.name.is_none() || config.guild.realm.is_none() {
        tracing::warn!("GUILD_NAME or GUILD_REALM not set, guild routes need realm and name query parameters");
    }
}

//! Query parameter structs and validation shared by the controllers.
//!
//! Every field is extracted as an optional string so that missing and malformed values are
//! both reported through `AppError::BadRequest` with the usual `{"error": ...}` body.

use serde::Deserialize;
use std::str::FromStr;

use crate::server::{
    error::AppError,
    model::{raid_helper::EventFilter, target::CharacterTarget},
};

/// Optional guild override. When absent the configured guild is used.
#[derive(Deserialize, Default)]
pub struct GuildParams {
    pub realm: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct CharacterParams {
    pub realm: Option<String>,
    pub character: Option<String>,
}

impl CharacterParams {
    /// Resolves the character, requiring both `realm` and `character`.
    pub fn into_target(self) -> Result<CharacterTarget, AppError> {
        let realm = required("realm", self.realm)?;
        let character = required("character", self.character)?;

        Ok(CharacterTarget::new(&realm, &character))
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemMediaParams {
    pub item_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct LogsParams {
    pub realm: Option<String>,
    pub name: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventParams {
    pub channel_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub include_sign_ups: Option<String>,
}

impl EventParams {
    /// Validates the optional filters.
    ///
    /// # Returns
    /// - `Ok(EventFilter)` - Filters to forward to Raid-Helper
    /// - `Err(AppError::BadRequest)` - A time is not an integer or `includeSignUps` is not a boolean
    pub fn into_filter(self) -> Result<EventFilter, AppError> {
        Ok(EventFilter {
            channel_id: optional(self.channel_id),
            start_time: optional_parsed("startTime", self.start_time)?,
            end_time: optional_parsed("endTime", self.end_time)?,
            include_sign_ups: optional_parsed("includeSignUps", self.include_sign_ups)?
                .unwrap_or(false),
        })
    }
}

/// Returns a required parameter, rejecting absent or blank values.
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - Parameter missing or blank
pub fn required(name: &str, value: Option<String>) -> Result<String, AppError> {
    optional(value)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required query parameter '{}'", name)))
}

/// Parses a required parameter.
pub fn required_parsed<T: FromStr>(name: &str, value: Option<String>) -> Result<T, AppError> {
    let value = required(name, value)?;
    parse(name, &value)
}

/// Parses an optional parameter. Blank values count as absent.
pub fn optional_parsed<T: FromStr>(name: &str, value: Option<String>) -> Result<Option<T>, AppError> {
    optional(value).map(|value| parse(name, &value)).transpose()
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid value '{}' for query parameter '{}'", value, name)))
}

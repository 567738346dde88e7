//! Guild and character identifiers resolved from query parameters and configuration.

use crate::server::{
    config::GuildConfig,
    error::{config::ConfigError, AppError},
    util::slug::{realm_slug, slugify},
};

/// A guild as the upstream APIs address it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildTarget {
    pub realm_slug: String,
    pub name_slug: String,
    /// Display name, used where an API wants the name rather than the slug.
    pub name: String,
    pub region: String,
}

impl GuildTarget {
    /// Resolves the guild from optional query overrides, falling back to configuration.
    ///
    /// # Returns
    /// - `Ok(GuildTarget)` - Realm and name known
    /// - `Err(AppError::ConfigErr)` - Neither the query nor the environment names the guild
    pub fn resolve(
        config: &GuildConfig,
        realm: Option<String>,
        name: Option<String>,
    ) -> Result<Self, AppError> {
        let realm = non_empty(realm)
            .or_else(|| config.realm.clone())
            .ok_or_else(|| ConfigError::MissingEnvVar("GUILD_REALM".to_string()))?;
        let name = non_empty(name)
            .or_else(|| config.name.clone())
            .ok_or_else(|| ConfigError::MissingEnvVar("GUILD_NAME".to_string()))?;

        Ok(Self {
            realm_slug: realm_slug(&realm),
            name_slug: slugify(&name),
            name,
            region: config.region.clone(),
        })
    }
}

/// A character as the Blizzard profile API addresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTarget {
    pub realm_slug: String,
    /// Lowercased character name. Non-ASCII letters are kept; Blizzard accepts them.
    pub name: String,
}

impl CharacterTarget {
    pub fn new(realm: &str, name: &str) -> Self {
        Self {
            realm_slug: realm_slug(realm),
            name: name.trim().to_lowercase(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

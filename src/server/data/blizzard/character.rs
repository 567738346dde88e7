use crate::server::{
    data::blizzard::{BlizzardClient, Namespace},
    error::AppError,
    model::{
        blizzard::{CharacterEquipment, CharacterProfile, MediaAssets},
        target::CharacterTarget,
    },
};

impl BlizzardClient {
    /// Fetches a character profile summary.
    ///
    /// # Returns
    /// - `Ok(CharacterProfile)` - Profile with every unknown field preserved
    /// - `Err(AppError::UpstreamErr)` - Character not found (404), upstream failure or a
    ///   payload without `name`/`level`
    pub async fn character_profile(
        &self,
        target: &CharacterTarget,
    ) -> Result<CharacterProfile, AppError> {
        self.get(&character_path(target, None), Namespace::Profile)
            .await
    }

    /// Fetches the items a character has equipped.
    pub async fn character_equipment(
        &self,
        target: &CharacterTarget,
    ) -> Result<CharacterEquipment, AppError> {
        self.get(&character_path(target, Some("equipment")), Namespace::Profile)
            .await
    }

    /// Fetches avatar, inset and full-body render URLs for a character.
    pub async fn character_media(&self, target: &CharacterTarget) -> Result<MediaAssets, AppError> {
        self.get(
            &character_path(target, Some("character-media")),
            Namespace::Profile,
        )
        .await
    }
}

fn character_path<'a>(target: &'a CharacterTarget, resource: Option<&'a str>) -> Vec<&'a str> {
    let mut segments = vec![
        "profile",
        "wow",
        "character",
        target.realm_slug.as_str(),
        target.name.as_str(),
    ];
    segments.extend(resource);
    segments
}

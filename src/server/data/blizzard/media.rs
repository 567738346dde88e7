use crate::server::{
    data::blizzard::{BlizzardClient, Namespace},
    error::AppError,
    model::blizzard::MediaAssets,
};

/// The two layers of a guild crest that have their own media documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrestLayer {
    Emblem,
    Border,
}

impl CrestLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emblem => "emblem",
            Self::Border => "border",
        }
    }
}

impl BlizzardClient {
    /// Fetches the icon media for an item.
    pub async fn item_media(&self, item_id: u64) -> Result<MediaAssets, AppError> {
        let item_id = item_id.to_string();
        self.get(&["data", "wow", "media", "item", &item_id], Namespace::Static)
            .await
    }

    /// Fetches the image of one guild crest layer.
    pub async fn guild_crest_media(
        &self,
        layer: CrestLayer,
        id: u32,
    ) -> Result<MediaAssets, AppError> {
        let id = id.to_string();
        self.get(
            &["data", "wow", "media", "guild-crest", layer.as_str(), &id],
            Namespace::Static,
        )
        .await
    }
}

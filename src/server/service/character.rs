use crate::{
    model::character::{CharacterMediaDto, EquipmentDto, ItemMediaDto},
    server::{
        data::blizzard::BlizzardClient,
        error::AppError,
        model::{blizzard::CharacterProfile, target::CharacterTarget},
    },
};

pub struct CharacterService<'a> {
    blizzard: &'a BlizzardClient,
}

impl<'a> CharacterService<'a> {
    pub fn new(blizzard: &'a BlizzardClient) -> Self {
        Self { blizzard }
    }

    /// Gets equipped items keyed by slot
    pub async fn equipment(&self, target: &CharacterTarget) -> Result<EquipmentDto, AppError> {
        let equipment = self.blizzard.character_equipment(target).await?;

        Ok(equipment.into_dto(target.name.clone()))
    }

    /// Gets the icon URL of an item
    pub async fn item_media(&self, item_id: u64) -> Result<ItemMediaDto, AppError> {
        let media = self.blizzard.item_media(item_id).await?;

        Ok(ItemMediaDto {
            item_id,
            icon_url: media.asset("icon"),
        })
    }

    /// Gets avatar, inset and full-body render URLs.
    ///
    /// Older profiles only publish `main` rather than `main-raw`; either is accepted.
    pub async fn avatar(&self, target: &CharacterTarget) -> Result<CharacterMediaDto, AppError> {
        let media = self.blizzard.character_media(target).await?;

        Ok(CharacterMediaDto {
            character: target.name.clone(),
            avatar_url: media.asset("avatar"),
            inset_url: media.asset("inset"),
            main_url: media.asset("main-raw").or_else(|| media.asset("main")),
        })
    }

    /// Gets the validated profile summary, passed through with every upstream field
    pub async fn profile(&self, target: &CharacterTarget) -> Result<CharacterProfile, AppError> {
        self.blizzard.character_profile(target).await
    }
}

use super::*;

/// Tests equipment keyed by slot.
///
/// Expected: MAIN_HAND and CHEST entries, character name from the request
#[tokio::test]
async fn returns_items_keyed_by_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            format!("{}/equipment", CHARACTER_PATH),
            fixture::blizzard::equipment(),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let equipment = CharacterService::new(&state.blizzard)
        .equipment(&thrall())
        .await?;

    assert_eq!(equipment.character, "thrall");
    assert_eq!(equipment.items.len(), 2);
    assert_eq!(
        equipment.items["MAIN_HAND"].name,
        "Thunderfury, Blessed Blade of the Windseeker"
    );
    assert_eq!(equipment.items["CHEST"].item_level, Some(66));

    Ok(())
}

/// Tests item media lookup.
///
/// Expected: icon URL from the `icon` asset
#[tokio::test]
async fn returns_item_icon() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json("/data/wow/media/item/19019", fixture::blizzard::item_media(19019))
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let media = CharacterService::new(&state.blizzard).item_media(19019).await?;

    assert_eq!(media.item_id, 19019);
    assert!(media.icon_url.unwrap().ends_with("item_19019.jpg"));

    Ok(())
}

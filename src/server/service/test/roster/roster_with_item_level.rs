use super::*;

/// Tests enrichment against the Blizzard API.
///
/// The second member has no profile, so the mock answers 404 for it.
///
/// Expected: item levels [62, 0, 481] and one token request for the whole roster
#[tokio::test]
async fn missing_profile_defaults_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(format!("{}/roster", GUILD_PATH), fixture::blizzard::roster_of(3))
        .with_json(
            "/profile/wow/character/pyrewood-village/member1",
            fixture::blizzard::character_profile("Member1", 62),
        )
        .with_json(
            "/profile/wow/character/pyrewood-village/member3",
            fixture::blizzard::character_profile("Member3", 481),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let members = RosterService::new(&state.blizzard, &state.config.guild)
        .roster_with_item_level(&guild_target(&state))
        .await?;

    let item_levels: Vec<u32> = members.iter().map(|m| m.average_item_level).collect();
    assert_eq!(item_levels, vec![62, 0, 481]);
    assert_eq!(members[2].item_level_tier, ItemLevelTier::Legendary);
    assert_eq!(test.token_requests(), 1);

    Ok(())
}

/// Tests that a roster failure is not swallowed.
///
/// Expected: Err(UpstreamErr) when the roster itself is missing
#[tokio::test]
async fn roster_failure_is_returned() {
    let test = TestBuilder::new().build().await.unwrap();
    let state = app_state(&test);

    let result = RosterService::new(&state.blizzard, &state.config.guild)
        .roster_with_item_level(&guild_target(&state))
        .await;

    assert!(matches!(result, Err(AppError::UpstreamErr(_))));
}

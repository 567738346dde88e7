use super::*;

/// Tests the guild summary.
///
/// Expected: realm display name, faction name and member count from the payload
#[tokio::test]
async fn returns_guild_summary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            GUILD_PATH,
            fixture::blizzard::guild("Nose Beers But No Gear", "Pyrewood Village"),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let info = GuildService::new(&state.blizzard, &state.config.guild)
        .info(&guild_target(&state))
        .await?;

    assert_eq!(info.name, "Nose Beers But No Gear");
    assert_eq!(info.realm, "Pyrewood Village");
    assert_eq!(info.faction, "Horde");
    assert_eq!(info.member_count, 87);
    assert_eq!(info.achievement_points, 1450);

    Ok(())
}

/// Tests an unknown guild.
///
/// Expected: upstream 404 passed through as 404
#[tokio::test]
async fn unknown_guild_is_not_found() {
    let test = TestBuilder::new().build().await.unwrap();
    let state = app_state(&test);

    let result = GuildService::new(&state.blizzard, &state.config.guild)
        .info(&guild_target(&state))
        .await;

    match result {
        Err(AppError::UpstreamErr(err)) => assert_eq!(err.status_code(), StatusCode::NOT_FOUND),
        other => panic!("expected upstream 404, got {:?}", other.map(|g| g.name)),
    }
}

/// Tests the activity feed conversion.
///
/// Expected: two entries with summaries
#[tokio::test]
async fn returns_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            format!("{}/activity", GUILD_PATH),
            fixture::blizzard::guild_activity(),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let activity = GuildService::new(&state.blizzard, &state.config.guild)
        .activity(&guild_target(&state))
        .await?;

    assert_eq!(activity.len(), 2);
    assert_eq!(activity[1].summary, "Defeated Lucifron (Normal)");

    Ok(())
}

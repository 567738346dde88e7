use super::*;

/// Tests roster conversion.
///
/// Expected: members in upstream order with class, rank name and item level 0
#[tokio::test]
async fn converts_members_without_item_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            format!("{}/roster", GUILD_PATH),
            fixture::blizzard::roster(&[
                fixture::blizzard::roster_member("Thrall", 60, 7, 2, 0),
                fixture::blizzard::roster_member("Rexxar", 60, 3, 2, 4),
            ]),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let members = RosterService::new(&state.blizzard, &state.config.guild)
        .roster(&guild_target(&state))
        .await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Thrall");
    assert_eq!(members[0].class, "Shaman");
    assert_eq!(members[0].rank, "Guild Master");
    assert_eq!(members[1].class, "Hunter");
    assert_eq!(members[1].rank, "Raider");
    assert!(members.iter().all(|m| m.average_item_level == 0));

    Ok(())
}

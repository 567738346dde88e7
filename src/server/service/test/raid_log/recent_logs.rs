use super::*;

/// Tests kill and wipe counting on real report payloads.
///
/// Expected: kills 1, wipes 1 (the trash fight counts as neither), best performance 100
#[tokio::test]
async fn counts_kills_and_wipes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            GRAPHQL_PATH,
            fixture::warcraft_logs::reports_response(vec![fixture::warcraft_logs::report(
                "aBc123",
                "Molten Core",
                1_700_000_000_000,
                vec![
                    fixture::warcraft_logs::fight("Lucifron", Some(true), Some(0.0)),
                    fixture::warcraft_logs::fight("Magmadar", Some(false), Some(35.0)),
                    fixture::warcraft_logs::fight("Trash", None, None),
                ],
            )]),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let logs = RaidLogService::new(&state.warcraft_logs)
        .recent_logs(&guild_target(&state), 10)
        .await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].raid, "Molten Core");
    assert_eq!(logs[0].kills, 1);
    assert_eq!(logs[0].wipes, 1);
    assert_eq!(logs[0].best_performance, Some(100.0));

    Ok(())
}

/// Tests the limit clamp.
///
/// Expected: a limit of 100 is sent as 25, a limit of 0 as 1
#[tokio::test]
async fn clamps_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(GRAPHQL_PATH, fixture::warcraft_logs::reports_response(Vec::new()))
        .build()
        .await
        .unwrap();
    let state = app_state(&test);
    let service = RaidLogService::new(&state.warcraft_logs);
    let target = guild_target(&state);

    service.recent_logs(&target, 100).await?;
    service.recent_logs(&target, 0).await?;

    let limits: Vec<u64> = test
        .requests_to(GRAPHQL_PATH)
        .iter()
        .filter_map(|r| r.json_body())
        .filter_map(|body| body["variables"]["limit"].as_u64())
        .collect();
    assert_eq!(limits, vec![25, 1]);

    Ok(())
}

use super::*;

/// Tests live events.
///
/// Expected: upstream events with `fallback` false
#[tokio::test]
async fn returns_live_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_paged_json(
            EVENTS_PATH,
            vec![fixture::raid_helper::events_page(
                1,
                1,
                vec![fixture::raid_helper::event("1", "Molten Core", 1_760_000_000)],
            )],
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let events = EventService::new(&state.raid_helper)
        .events(&EventFilter::default())
        .await?;

    assert!(!events.fallback);
    assert_eq!(events.posted_events[0].title, "Molten Core");

    Ok(())
}

/// Tests an upstream error status.
///
/// Expected: Ok with fallback events
#[tokio::test]
async fn upstream_error_serves_fallback() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_status(
            EVENTS_PATH,
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "boom" }),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let events = EventService::new(&state.raid_helper)
        .events(&EventFilter::default())
        .await?;

    assert!(events.fallback);
    assert!(!events.posted_events.is_empty());

    Ok(())
}

/// Tests an unreachable Raid-Helper.
///
/// Nothing listens on port 1, so the connection is refused.
///
/// Expected: Ok with fallback events
#[tokio::test]
async fn unreachable_service_serves_fallback() -> Result<(), AppError> {
    let mut config = Config::for_mock("http://127.0.0.1:1");
    config.raid_helper.api_url = "http://127.0.0.1:1".to_string();
    let state = app_state_for(config);

    let events = EventService::new(&state.raid_helper)
        .events(&EventFilter::default())
        .await?;

    assert!(events.fallback);

    Ok(())
}

/// Tests missing Raid-Helper configuration.
///
/// Expected: Err(ConfigErr(MissingEnvVar("RAID_HELPER_SERVER_ID")))
#[tokio::test]
async fn missing_configuration_is_not_masked() {
    let test = TestBuilder::new().build().await.unwrap();
    let mut config = Config::for_mock(&test.base_url);
    config.raid_helper.server_id = None;
    let state = app_state_for(config);

    let result = EventService::new(&state.raid_helper)
        .events(&EventFilter::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref var))) if var == "RAID_HELPER_SERVER_ID"
    ));
}

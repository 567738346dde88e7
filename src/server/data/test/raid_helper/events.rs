use super::*;

/// Tests merging a paginated listing.
///
/// Verifies that every page is requested with its `Page` header and that the events end
/// up in one envelope in page order.
///
/// Expected: three events from two pages, eventCount 3
#[tokio::test]
async fn merges_all_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_paged_json(
            EVENTS_PATH,
            vec![
                fixture::raid_helper::events_page(
                    1,
                    2,
                    vec![
                        fixture::raid_helper::event("1", "Molten Core", 1_760_000_000),
                        fixture::raid_helper::event("2", "Onyxia", 1_760_100_000),
                    ],
                ),
                fixture::raid_helper::events_page(
                    2,
                    2,
                    vec![fixture::raid_helper::event("3", "Blackwing Lair", 1_760_200_000)],
                ),
            ],
        )
        .build()
        .await
        .unwrap();

    let events = client(&test).events(&EventFilter::default()).await?;

    assert_eq!(events.pages, 2);
    assert_eq!(events.current_page, 1);
    assert_eq!(events.event_count, 3);
    assert!(!events.fallback);
    let titles: Vec<&str> = events.posted_events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Molten Core", "Onyxia", "Blackwing Lair"]);

    let pages: Vec<Option<String>> = test
        .requests_to(EVENTS_PATH)
        .iter()
        .map(|r| r.header("page").map(str::to_string))
        .collect();
    assert_eq!(pages, vec![Some("1".to_string()), Some("2".to_string())]);

    Ok(())
}

/// Tests that unknown event fields are passed through.
///
/// Expected: `signUpCount` kept in `extra`
#[tokio::test]
async fn keeps_unknown_event_fields() -> Result<(), AppError> {
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

    let events = client(&test).events(&EventFilter::default()).await?;

    let event = &events.posted_events[0];
    assert_eq!(event.leader_name.as_deref(), Some("Thrall"));
    assert_eq!(event.extra["signUpCount"], json!("24"));

    Ok(())
}

/// Tests API key and filter headers.
///
/// Expected: Authorization carries the raw key, filters sent as headers
#[tokio::test]
async fn sends_key_and_filters_as_headers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_paged_json(
            EVENTS_PATH,
            vec![fixture::raid_helper::events_page(1, 1, Vec::new())],
        )
        .build()
        .await
        .unwrap();

    client(&test)
        .events(&EventFilter {
            channel_id: Some("987654321098765432".to_string()),
            start_time: Some(1_760_000_000),
            end_time: Some(1_760_600_000),
            include_sign_ups: true,
        })
        .await?;

    let request = &test.requests_to(EVENTS_PATH)[0];
    assert_eq!(request.header("authorization"), Some("raid-helper-key"));
    assert_eq!(request.header("channelfilter"), Some("987654321098765432"));
    assert_eq!(request.header("starttimefilter"), Some("1760000000"));
    assert_eq!(request.header("endtimefilter"), Some("1760600000"));
    assert_eq!(request.header("includesignups"), Some("true"));
    assert_eq!(test.token_requests(), 0);

    Ok(())
}

/// Tests a missing API key.
///
/// Expected: Err(ConfigErr(MissingEnvVar("RAID_HELPER_API_KEY"))), no request sent
#[tokio::test]
async fn missing_api_key_is_configuration_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let mut config = Config::for_mock(&test.base_url);
    config.raid_helper.api_key = None;

    let result = client_for(&config).events(&EventFilter::default()).await;

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref var))) if var == "RAID_HELPER_API_KEY"
    ));
    assert!(test.requests().is_empty());
}

/// Tests an upstream error status.
///
/// Expected: Err(UpstreamErr(Http)) with status 503
#[tokio::test]
async fn upstream_error_status_is_reported() {
    let test = TestBuilder::new()
        .with_status(
            EVENTS_PATH,
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": "maintenance" }),
        )
        .build()
        .await
        .unwrap();

    let result = client(&test).events(&EventFilter::default()).await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamErr(UpstreamError::Http { status, .. }))
            if status == StatusCode::SERVICE_UNAVAILABLE
    ));
}

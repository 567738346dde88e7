use super::*;

/// Tests filters forwarded as headers.
///
/// Expected: 200, and the request carries the channel and start time filters
#[tokio::test]
async fn forwards_filters() {
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
    let params = EventParams {
        channel_id: Some("998877".to_string()),
        start_time: Some("1760000000".to_string()),
        ..Default::default()
    };

    let response = get_events(State(state), Query(params)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fallback"], false);
    assert_eq!(body["postedEvents"][0]["title"], "Molten Core");

    let requests = test.requests_to(EVENTS_PATH);
    assert_eq!(requests[0].header("ChannelFilter"), Some("998877"));
    assert_eq!(requests[0].header("StartTimeFilter"), Some("1760000000"));
}

/// Tests Raid-Helper answering with an error.
///
/// Expected: 200 with fallback events
#[tokio::test]
async fn upstream_failure_serves_fallback() {
    let test = TestBuilder::new()
        .with_status(
            EVENTS_PATH,
            StatusCode::BAD_GATEWAY,
            json!({ "error": "upstream down" }),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_events(State(state), Query(EventParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fallback"], true);
    assert!(!body["postedEvents"].as_array().unwrap().is_empty());
}

/// Tests a missing API key.
///
/// Expected: 500 naming RAID_HELPER_API_KEY
#[tokio::test]
async fn missing_api_key_is_server_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let mut config = Config::for_mock(&test.base_url);
    config.raid_helper.api_key = None;
    let state = app_state_for(config);

    let response = get_events(State(state), Query(EventParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("RAID_HELPER_API_KEY"));
    assert!(test.requests().is_empty());
}

/// Tests a malformed start time.
///
/// Expected: 400, no upstream request
#[tokio::test]
async fn malformed_start_time_is_bad_request() {
    let test = TestBuilder::new().build().await.unwrap();
    let state = app_state(&test);
    let params = EventParams {
        start_time: Some("tomorrow".to_string()),
        ..Default::default()
    };

    let response = get_events(State(state), Query(params)).await.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test.requests().is_empty());
}

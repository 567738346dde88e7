use super::*;

/// Tests the logs endpoint without a limit.
///
/// Expected: 200 and the GraphQL query asks for 10 reports
#[tokio::test]
async fn uses_default_limit() {
    let test = TestBuilder::new()
        .with_json(
            GRAPHQL_PATH,
            fixture::warcraft_logs::reports_response(vec![fixture::warcraft_logs::report(
                "aBc123",
                "Molten Core",
                1_700_000_000_000,
                vec![fixture::warcraft_logs::fight("Ragnaros", Some(true), Some(0.0))],
            )]),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_logs(State(state), Query(LogsParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["code"], "aBc123");
    assert_eq!(body[0]["kills"], 1);

    let variables = test.requests_to(GRAPHQL_PATH)[0].json_body().unwrap()["variables"].clone();
    assert_eq!(variables["limit"], 10);
}

/// Tests an out-of-range limit.
///
/// Expected: 400 before any upstream request
#[tokio::test]
async fn out_of_range_limit_is_bad_request() {
    let test = TestBuilder::new().build().await.unwrap();
    let state = app_state(&test);
    let params = LogsParams {
        limit: Some("50".to_string()),
        ..Default::default()
    };

    let response = get_logs(State(state), Query(params)).await.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test.requests().is_empty());
    assert_eq!(test.token_requests(), 0);
}

/// Tests a GraphQL error in a 200 response.
///
/// Expected: 502
#[tokio::test]
async fn graphql_error_is_bad_gateway() {
    let test = TestBuilder::new()
        .with_json(
            GRAPHQL_PATH,
            fixture::warcraft_logs::graphql_error("Guild not found"),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_logs(State(state), Query(LogsParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

/// Tests the members endpoint.
///
/// Expected: 200 with WarcraftLogs class names
#[tokio::test]
async fn returns_members() {
    let test = TestBuilder::new()
        .with_json(
            GRAPHQL_PATH,
            fixture::warcraft_logs::guild_members_response(vec![
                fixture::warcraft_logs::guild_member("Thrall", 9, 60, 0),
            ]),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_members(State(state), Query(GuildParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["class"], "Shaman");
}

use super::*;

/// Tests the guild endpoint with the configured guild.
///
/// Expected: 200 with the camelCase guild summary
#[tokio::test]
async fn returns_configured_guild() {
    let test = TestBuilder::new()
        .with_json(
            GUILD_PATH,
            fixture::blizzard::guild("Nose Beers But No Gear", "Pyrewood Village"),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_guild(State(state), Query(GuildParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Nose Beers But No Gear");
    assert_eq!(body["memberCount"], 87);
}

/// Tests the guild override query parameters.
///
/// Expected: the request goes to the slugged override guild
#[tokio::test]
async fn query_overrides_configured_guild() {
    let test = TestBuilder::new()
        .with_json(
            "/data/wow/guild/zul-jin/other-guild",
            fixture::blizzard::guild("Other Guild", "Zul'jin"),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);
    let params = GuildParams {
        realm: Some("Zul'jin".to_string()),
        name: Some("Other Guild".to_string()),
    };

    let response = get_guild(State(state), Query(params)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(test.requests_to("/data/wow/guild/zul-jin/other-guild").len(), 1);
}

/// Tests a guild that is configured nowhere.
///
/// Expected: 500 naming GUILD_NAME, no upstream request
#[tokio::test]
async fn missing_guild_name_is_server_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let mut config = Config::for_mock(&test.base_url);
    config.guild.name = None;
    let state = app_state_for(config);

    let response = get_roster(State(state), Query(GuildParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("GUILD_NAME"));
    assert!(test.requests().is_empty());
    assert_eq!(test.token_requests(), 0);
}

/// Tests missing Blizzard credentials.
///
/// Expected: 500 naming BLIZZARD_CLIENT_ID, no token request
#[tokio::test]
async fn missing_credentials_is_server_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let mut config = Config::for_mock(&test.base_url);
    config.blizzard.credentials.client_id = None;
    let state = app_state_for(config);

    let response = get_guild(State(state), Query(GuildParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("BLIZZARD_CLIENT_ID"));
    assert_eq!(test.token_requests(), 0);
}

/// Tests an upstream server error.
///
/// Expected: 502 with an error body
#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let test = TestBuilder::new()
        .with_status(
            format!("{}/roster", GUILD_PATH),
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "detail": "maintenance" }),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_roster(State(state), Query(GuildParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

/// Tests a guild Blizzard does not know.
///
/// Expected: 404
#[tokio::test]
async fn unknown_guild_is_not_found() {
    let test = TestBuilder::new()
        .with_status(GUILD_PATH, StatusCode::NOT_FOUND, json!({ "code": 404 }))
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_guild(State(state), Query(GuildParams::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

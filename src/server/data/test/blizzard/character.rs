use super::*;

/// Tests the character profile passthrough.
///
/// Verifies that validated fields are typed and every other field survives.
///
/// Expected: Ok(CharacterProfile) with level 60 and the faction kept in `rest`
#[tokio::test]
async fn profile_keeps_unknown_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            CHARACTER_PATH,
            fixture::blizzard::character_profile("Thrall", 62),
        )
        .build()
        .await
        .unwrap();

    let profile = client(&test).character_profile(&thrall()).await?;

    assert_eq!(profile.name, "Thrall");
    assert_eq!(profile.level, 60);
    assert_eq!(profile.item_level(), 62);
    assert_eq!(profile.rest["faction"]["type"], "HORDE");

    Ok(())
}

/// Tests an unknown character.
///
/// Expected: Err(UpstreamErr(Http)) with status 404
#[tokio::test]
async fn unknown_character_is_not_found() {
    let test = TestBuilder::new().build().await.unwrap();

    let result = client(&test).character_profile(&thrall()).await;

    match result {
        Err(AppError::UpstreamErr(err)) => {
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
        other => panic!("expected upstream 404, got {:?}", other.map(|p| p.name)),
    }
}

/// Tests a profile missing a required field.
///
/// Expected: Err(UpstreamErr(Contract))
#[tokio::test]
async fn profile_without_level_violates_contract() {
    let test = TestBuilder::new()
        .with_json(CHARACTER_PATH, json!({ "name": "Thrall" }))
        .build()
        .await
        .unwrap();

    let result = client(&test).character_profile(&thrall()).await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamErr(UpstreamError::Contract { .. }))
    ));
}

/// Tests that a 401 drops the cached token.
///
/// Verifies that after the upstream rejects a token, the following request obtains a new
/// one rather than reusing the rejected token.
///
/// Expected: first call fails with HTTP 401, second call uses "token-2"
#[tokio::test]
async fn unauthorized_invalidates_token() {
    let test = TestBuilder::new()
        .with_status(
            format!("{}/equipment", CHARACTER_PATH),
            StatusCode::UNAUTHORIZED,
            json!({ "code": 401, "type": "BLZWEBAPI00000401", "detail": "Unauthorized" }),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let first = client.character_equipment(&thrall()).await;
    assert!(matches!(
        first,
        Err(AppError::UpstreamErr(UpstreamError::Http { status, .. }))
            if status == StatusCode::UNAUTHORIZED
    ));

    let _ = client.character_equipment(&thrall()).await;

    let requests = test.requests_to(&format!("{}/equipment", CHARACTER_PATH));
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].header("authorization"), Some("Bearer token-2"));
    assert_eq!(test.token_requests(), 2);
}

/// Tests the character media endpoint.
///
/// Expected: avatar asset present
#[tokio::test]
async fn fetches_character_media() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            format!("{}/character-media", CHARACTER_PATH),
            fixture::blizzard::character_media("Thrall"),
        )
        .build()
        .await
        .unwrap();

    let media = client(&test).character_media(&thrall()).await?;

    assert!(media.asset("avatar").unwrap().ends_with("thrall-avatar.jpg"));
    assert!(media.asset("missing").is_none());

    Ok(())
}

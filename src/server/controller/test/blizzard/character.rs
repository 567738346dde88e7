use super::*;

/// Tests equipment for a named character.
///
/// Expected: 200 with items keyed by slot
#[tokio::test]
async fn returns_equipment() {
    let test = TestBuilder::new()
        .with_json(EQUIPMENT_PATH, fixture::blizzard::equipment())
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let response = get_equipment(State(state), Query(thrall()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["items"].is_object());
}

/// Tests a missing `character` parameter.
///
/// Expected: 400 naming the parameter, no upstream request
#[tokio::test]
async fn missing_character_is_bad_request() {
    let test = TestBuilder::new().build().await.unwrap();
    let state = app_state(&test);
    let params = CharacterParams {
        realm: Some("Pyrewood Village".to_string()),
        character: None,
    };

    let response = get_equipment(State(state), Query(params))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("character"));
    assert!(test.requests().is_empty());
    assert_eq!(test.token_requests(), 0);
}

/// Tests a missing `realm` parameter.
///
/// Expected: 400
#[tokio::test]
async fn missing_realm_is_bad_request() {
    let test = TestBuilder::new().build().await.unwrap();
    let state = app_state(&test);
    let params = CharacterParams {
        realm: None,
        character: Some("Thrall".to_string()),
    };

    let response = get_equipment(State(state), Query(params))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests item media with a valid id.
///
/// Expected: 200 with an icon URL
#[tokio::test]
async fn returns_item_media() {
    let test = TestBuilder::new()
        .with_json("/data/wow/media/item/19019", fixture::blizzard::item_media(19019))
        .build()
        .await
        .unwrap();
    let state = app_state(&test);
    let params = ItemMediaParams {
        item_id: Some("19019".to_string()),
    };

    let response = get_item_media(State(state), Query(params))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests missing and non-numeric item ids.
///
/// Expected: 400 for both
#[tokio::test]
async fn invalid_item_id_is_bad_request() {
    let test = TestBuilder::new().build().await.unwrap();

    for item_id in [None, Some("thunderfury".to_string())] {
        let state = app_state(&test);

        let response = get_item_media(State(state), Query(ItemMediaParams { item_id }))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert!(test.requests().is_empty());
}

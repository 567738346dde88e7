use super::*;

/// Tests seeding the cache with a caller-provided token.
///
/// Expected: Ok("seeded"), no token request
#[tokio::test]
async fn seeded_token_is_served() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let cache = token_cache(&test, credentials());

    cache
        .set(AccessToken::issued(
            "seeded".to_string(),
            Instant::now(),
            Duration::from_secs(3600),
        ))
        .await;

    assert_eq!(cache.get_token().await?, "seeded");
    assert_eq!(test.token_requests(), 0);

    Ok(())
}

/// Tests removing the cached token.
///
/// Verifies that `take` returns the cached token once, leaves the cache empty, and that
/// the next `get_token` refreshes.
///
/// Expected: Some(token) then None, then a token request
#[tokio::test]
async fn take_empties_the_cache() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let cache = token_cache(&test, credentials());

    cache.get_token().await?;

    let taken = cache.take().await;
    assert_eq!(taken.map(|token| token.value), Some("token-1".to_string()));
    assert!(cache.take().await.is_none());

    assert_eq!(cache.get_token().await?, "token-2");
    assert_eq!(test.token_requests(), 2);

    Ok(())
}

/// Tests that invalidation forces a refresh.
///
/// Expected: "token-1", then "token-2" after invalidate
#[tokio::test]
async fn invalidate_forces_refresh() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let cache = token_cache(&test, credentials());

    assert_eq!(cache.get_token().await?, "token-1");

    cache.invalidate().await;

    assert_eq!(cache.get_token().await?, "token-2");

    Ok(())
}

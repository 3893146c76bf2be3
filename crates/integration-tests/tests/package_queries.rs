//! Cached package reads: cache hits, staleness, envelope handling, retries.

use mockito::Matcher;
use serde_json::json;
use wisata_client::{ApiError, PackageQuery, WisataClient};
use wisata_core::PackageId;
use wisata_integration_tests::TestContext;

fn package_body() -> serde_json::Value {
    json!({
        "message": "ok",
        "meta": {"page": 1, "limit": 10, "count": 1},
        "data": [{
            "id": 5,
            "title": "Bromo Sunrise",
            "slug": "bromo-sunrise",
            "price": "1500000",
            "categoryId": 2,
            "isActive": true
        }]
    })
}

// =============================================================================
// Cache Behavior
// =============================================================================

#[tokio::test]
async fn test_second_list_is_served_from_cache() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(package_body().to_string())
        .expect(1)
        .create_async()
        .await;

    let query = PackageQuery::default();
    let first = ctx.client.list_packages(&query).await.expect("first fetch");
    let second = ctx.client.list_packages(&query).await.expect("cached read");

    assert_eq!(first.items.len(), 1);
    assert_eq!(second.items.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_options_are_sent_as_query_parameters() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".to_string(), "2".to_string()),
            Matcher::UrlEncoded("limit".to_string(), "5".to_string()),
            Matcher::UrlEncoded("isActive".to_string(), "true".to_string()),
        ]))
        .with_status(200)
        .with_body(package_body().to_string())
        .expect(1)
        .create_async()
        .await;

    let query = PackageQuery {
        page: Some(2),
        limit: Some(5),
        is_active: Some(true),
        ..PackageQuery::default()
    };
    ctx.client.list_packages(&query).await.expect("filtered fetch");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_different_queries_do_not_share_cache_entries() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(package_body().to_string())
        .expect(2)
        .create_async()
        .await;

    let page_one = PackageQuery {
        page: Some(1),
        ..PackageQuery::default()
    };
    let page_two = PackageQuery {
        page: Some(2),
        ..PackageQuery::default()
    };
    ctx.client.list_packages(&page_one).await.expect("page 1");
    ctx.client.list_packages(&page_two).await.expect("page 2");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_stale_entry_triggers_refetch() {
    let mut ctx = TestContext::always_stale().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(package_body().to_string())
        .expect(2)
        .create_async()
        .await;

    let query = PackageQuery::default();
    ctx.client.list_packages(&query).await.expect("first fetch");
    ctx.client.list_packages(&query).await.expect("refetch");

    mock.assert_async().await;
}

// =============================================================================
// Envelope Handling
// =============================================================================

#[tokio::test]
async fn test_malformed_list_payload_yields_empty_listing() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"message": "ok", "data": "not-an-array"}).to_string())
        .create_async()
        .await;

    let listing = ctx
        .client
        .list_packages(&PackageQuery::default())
        .await
        .expect("degraded payload is not an error");

    assert!(listing.items.is_empty());
}

#[tokio::test]
async fn test_bare_array_payload_is_accepted() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!([{
                "id": 5,
                "title": "Bromo Sunrise",
                "slug": "bromo-sunrise",
                "price": 1_500_000,
                "categoryId": 2
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let listing = ctx
        .client
        .list_packages(&PackageQuery::default())
        .await
        .expect("bare array parses");

    assert_eq!(listing.items.len(), 1);
    // No meta in a bare array; fallback uses the actual item count.
    assert_eq!(listing.meta.count, 1);
}

#[tokio::test]
async fn test_detail_unwraps_data_envelope() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/tour-packages/5")
        .with_status(200)
        .with_body(
            json!({
                "message": "ok",
                "data": {
                    "id": 5,
                    "title": "Bromo Sunrise",
                    "slug": "bromo-sunrise",
                    "price": "1500000",
                    "categoryId": 2
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let package = ctx
        .client
        .get_package(PackageId::new(5))
        .await
        .expect("detail fetch");

    assert_eq!(package.slug, "bromo-sunrise");
}

// =============================================================================
// Retry Behavior
// =============================================================================

#[tokio::test]
async fn test_get_retries_server_errors_three_times() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(json!({"message": "boom"}).to_string())
        .expect(3)
        .create_async()
        .await;

    let err = ctx
        .client
        .list_packages(&PackageQuery::default())
        .await
        .expect_err("exhausted retries fail");

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_does_not_retry_not_found() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages/99")
        .with_status(404)
        .with_body(json!({"message": "package not found"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let err = ctx
        .client
        .get_package(PackageId::new(99))
        .await
        .expect_err("missing package");

    assert!(matches!(err, ApiError::NotFound(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_message_comes_from_envelope() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/tour-packages/99")
        .with_status(404)
        .with_body(json!({"message": "package not found"}).to_string())
        .create_async()
        .await;

    let err = ctx
        .client
        .get_package(PackageId::new(99))
        .await
        .expect_err("missing package");

    match err {
        ApiError::NotFound(message) => assert_eq!(message, "package not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Shared Cache Across Clones
// =============================================================================

#[tokio::test]
async fn test_clones_share_one_cache() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx
        .server
        .mock("GET", "/tour-packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(package_body().to_string())
        .expect(1)
        .create_async()
        .await;

    let clone: WisataClient = ctx.client.clone();
    let query = PackageQuery::default();
    ctx.client.list_packages(&query).await.expect("first fetch");
    clone.list_packages(&query).await.expect("cached via clone");

    mock.assert_async().await;
}

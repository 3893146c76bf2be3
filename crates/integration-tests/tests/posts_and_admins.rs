//! Post and admin endpoints: envelope aliases, slug lookups, token gating.

use mockito::Matcher;
use serde_json::json;
use wisata_client::{ApiError, ImageFile, PostQuery};
use wisata_core::{AdminDraft, AdminRole, PostDraft, PostId, PostStatus, PostType};
use wisata_integration_tests::TestContext;

fn post_json(id: i32, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Travel tips",
        "slug": slug,
        "type": "BLOG",
        "status": "PUBLISHED",
        "imageUrls": ["/uploads/a.png"]
    })
}

// =============================================================================
// Envelope Aliases
// =============================================================================

#[tokio::test]
async fn test_post_list_under_posts_key() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/posts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"message": "ok", "posts": [post_json(9, "travel-tips")]}).to_string())
        .create_async()
        .await;

    let listing = ctx
        .client
        .list_posts(&PostQuery::default())
        .await
        .expect("list parses");

    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].post_type, PostType::Blog);
}

#[tokio::test]
async fn test_post_detail_under_post_key() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/posts/9")
        .with_status(200)
        .with_body(json!({"message": "ok", "post": post_json(9, "travel-tips")}).to_string())
        .create_async()
        .await;

    let post = ctx.client.get_post(PostId::new(9)).await.expect("detail");
    assert_eq!(post.slug, "travel-tips");
}

#[tokio::test]
async fn test_admin_list_under_admins_key() {
    let mut ctx = TestContext::new().await;
    ctx.server
        .mock("GET", "/admin")
        .with_status(200)
        .with_body(
            json!({"message": "ok", "admins": [{"id": 1, "email": "a@b.c", "role": "SUPER"}]})
                .to_string(),
        )
        .create_async()
        .await;

    let admins = ctx.client.list_admins().await.expect("list parses");
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].role, AdminRole::Super);
}

// =============================================================================
// Slug Lookups
// =============================================================================

#[tokio::test]
async fn test_post_by_slug_is_cached_separately_from_id() {
    let mut ctx = TestContext::anonymous().await;
    let by_slug = ctx
        .server
        .mock("GET", "/posts/slug/travel-tips")
        .with_status(200)
        .with_body(json!({"post": post_json(9, "travel-tips")}).to_string())
        .expect(1)
        .create_async()
        .await;
    let by_id = ctx
        .server
        .mock("GET", "/posts/9")
        .with_status(200)
        .with_body(json!({"post": post_json(9, "travel-tips")}).to_string())
        .expect(1)
        .create_async()
        .await;

    ctx.client
        .get_post_by_slug("travel-tips")
        .await
        .expect("by slug");
    ctx.client.get_post(PostId::new(9)).await.expect("by id");
    // A second slug lookup is a cache hit.
    ctx.client
        .get_post_by_slug("travel-tips")
        .await
        .expect("cached");

    by_slug.assert_async().await;
    by_id.assert_async().await;
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let mut ctx = TestContext::anonymous().await;
    ctx.server
        .mock("GET", "/posts/slug/nope")
        .with_status(404)
        .with_body(json!({"message": "post not found"}).to_string())
        .create_async()
        .await;

    let err = ctx
        .client
        .get_post_by_slug("nope")
        .await
        .expect_err("missing post");

    assert!(matches!(err, ApiError::NotFound(_)));
}

// =============================================================================
// Multipart Post Mutations
// =============================================================================

#[tokio::test]
async fn test_create_post_sends_fields_and_images_as_multipart() {
    let mut ctx = TestContext::new().await;
    let mock = ctx
        .server
        .mock("POST", "/posts")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("(?s)name=\"title\".*?\r\n\r\nTravel tips\r\n".to_string()),
            Matcher::Regex("(?s)name=\"type\".*?\r\n\r\nBLOG\r\n".to_string()),
            Matcher::Regex("filename=\"a\\.png\"".to_string()),
        ]))
        .with_status(201)
        .with_body(json!({"post": post_json(9, "travel-tips")}).to_string())
        .expect(1)
        .create_async()
        .await;

    let draft = PostDraft {
        title: "Travel tips".to_string(),
        slug: "travel-tips".to_string(),
        body: "Pack light.".to_string(),
        post_type: PostType::Blog,
        status: PostStatus::Published,
    };
    let images = vec![ImageFile {
        file_name: "a.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: b"png-bytes".to_vec(),
    }];
    ctx.client.create_post(&draft, images).await.expect("create");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_mutation_invalidates_post_lists() {
    let mut ctx = TestContext::new().await;
    let list_mock = ctx
        .server
        .mock("GET", "/posts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"posts": [post_json(9, "travel-tips")]}).to_string())
        .expect(2)
        .create_async()
        .await;
    ctx.server
        .mock("DELETE", "/posts/9")
        .with_status(200)
        .with_body(json!({"message": "deleted"}).to_string())
        .create_async()
        .await;

    let query = PostQuery::default();
    ctx.client.list_posts(&query).await.expect("prime cache");
    ctx.client.delete_post(PostId::new(9)).await.expect("delete");
    ctx.client.list_posts(&query).await.expect("refetch");

    list_mock.assert_async().await;
}

// =============================================================================
// Admin Token Gating
// =============================================================================

#[tokio::test]
async fn test_admin_list_without_token_makes_no_request() {
    let mut ctx = TestContext::anonymous().await;
    let mock = ctx.server.mock("GET", "/admin").expect(0).create_async().await;

    let err = ctx.client.list_admins().await.expect_err("no token");

    assert!(matches!(err, ApiError::AuthenticationRequired));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_admin_register_posts_to_register_endpoint() {
    let mut ctx = TestContext::new().await;
    let mock = ctx
        .server
        .mock("POST", "/admin/register")
        .match_body(Matcher::PartialJson(json!({
            "email": "new@wisata.dev",
            "role": "NORMAL"
        })))
        .with_status(201)
        .with_body(json!({"admins": {"id": 2, "email": "new@wisata.dev", "role": "NORMAL"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let admin = ctx
        .client
        .create_admin(&AdminDraft {
            email: "new@wisata.dev".to_string(),
            password: "hunter2".to_string(),
            role: AdminRole::Normal,
        })
        .await
        .expect("register");

    assert_eq!(admin.email, "new@wisata.dev");
    mock.assert_async().await;
}

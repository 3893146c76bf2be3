//! Integration tests for the Wisata client.
//!
//! Every test runs against a local `mockito` server; no real API is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wisata-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `package_queries` - Cached reads, envelope handling, retries
//! - `package_mutations` - Invalidation after create/update/delete, auth gating
//! - `uploads` - Multi-file gallery upload batches
//! - `posts_and_admins` - Slug lookups, envelope aliases, admin operations

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use mockito::ServerGuard;
use secrecy::SecretString;
use wisata_client::{ClientConfig, ResourceCache, WisataClient};

/// A mock API server plus a client pointed at it.
///
/// Each context gets its own server and its own cache store, so tests never
/// interfere with each other.
pub struct TestContext {
    pub server: ServerGuard,
    pub client: WisataClient,
}

impl TestContext {
    /// Context with an admin token configured.
    pub async fn new() -> Self {
        Self::build(true, None).await
    }

    /// Context without a token (public access only).
    pub async fn anonymous() -> Self {
        Self::build(false, None).await
    }

    /// Context whose cache treats every entry as stale immediately.
    pub async fn always_stale() -> Self {
        Self::build(true, Some(Duration::ZERO)).await
    }

    async fn build(with_token: bool, stale_after: Option<Duration>) -> Self {
        let server = mockito::Server::new_async().await;
        let mut config = ClientConfig::new(server.url());
        if with_token {
            config = config.with_admin_token(SecretString::from("test-token"));
        }
        let cache = stale_after.map_or_else(ResourceCache::new, ResourceCache::with_stale_after);
        let client = WisataClient::with_cache(config, cache);
        Self { server, client }
    }
}

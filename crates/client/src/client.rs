//! The client facade shared by all resource modules.

use std::sync::Arc;

use tracing::error;

use crate::cache::{Resource, ResourceCache};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::pending::PendingSet;

/// Client for the Wisata content API.
///
/// Provides cached read access and mutation methods for tour packages,
/// posts, categories, gallery images, and admin accounts. Cloning is cheap;
/// all clones share one cache and one HTTP connection pool.
#[derive(Clone)]
pub struct WisataClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: HttpClient,
    pub(crate) cache: ResourceCache,
    pub(crate) pending: PendingSet,
    pub(crate) config: ClientConfig,
}

impl WisataClient {
    /// Create a client with a default cache (5-minute stale window).
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_cache(config, ResourceCache::new())
    }

    /// Create a client around an injected cache store. Tests use this to get
    /// a fresh store per case.
    #[must_use]
    pub fn with_cache(config: ClientConfig, cache: ResourceCache) -> Self {
        let http = HttpClient::new(&config.api_host, config.admin_token.clone());
        Self {
            inner: Arc::new(ClientInner {
                http,
                cache,
                pending: PendingSet::default(),
                config,
            }),
        }
    }

    /// The cache store backing this client.
    #[must_use]
    pub fn cache(&self) -> &ResourceCache {
        &self.inner.cache
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Whether an update or delete is currently in flight for the given
    /// entity. Lets a UI disable a single row rather than the whole list.
    #[must_use]
    pub fn is_pending(&self, resource: Resource, id: i32) -> bool {
        self.inner.pending.contains(resource, id)
    }

    /// Fail fast when an admin-scoped operation runs without a token. No
    /// network call is attempted in that case.
    pub(crate) fn require_token(&self) -> Result<(), ApiError> {
        if self.inner.http.has_token() {
            Ok(())
        } else {
            error!("admin operation attempted without a configured token");
            Err(ApiError::AuthenticationRequired)
        }
    }
}

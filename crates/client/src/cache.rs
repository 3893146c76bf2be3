//! Process-wide cache of fetched server entities.
//!
//! Keyed by `(resource, serialized query options)`. Entries carry a fetch
//! timestamp and an explicit stale flag: an entry is stale once it is older
//! than the stale window (5 minutes) or after an [`ResourceCache::invalidate`]
//! call for its resource. Invalidation is synchronous, so by the time a
//! mutation returns, no consumer can observe a fresh-looking entry for the
//! mutated resource.
//!
//! The backing map is a `moka` future cache with a TTL above the stale window
//! and bounded capacity, so dead entries are evicted without a sweeper.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use moka::future::Cache;
use wisata_core::{AdminUser, Category, Listing, PackageImage, Post, TourPackage};

/// Age after which a cached entry is considered stale.
pub const STALE_AFTER: Duration = Duration::from_secs(5 * 60);

const MAX_ENTRIES: u64 = 1_000;
const EVICT_AFTER: Duration = Duration::from_secs(10 * 60);

/// Resource types the cache is partitioned by. Invalidation operates on a
/// whole partition (all list and detail keys of one resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Packages,
    Posts,
    Categories,
    PackageImages,
    Admins,
}

/// Cache key: resource type plus the serialized query options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub resource: Resource,
    pub query: String,
}

impl CacheKey {
    /// Key for a list query.
    #[must_use]
    pub fn list(resource: Resource, query: impl Into<String>) -> Self {
        Self {
            resource,
            query: query.into(),
        }
    }

    /// Key for a single-entity detail query.
    #[must_use]
    pub fn detail(resource: Resource, id: i32) -> Self {
        Self {
            resource,
            query: format!("id:{id}"),
        }
    }
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Packages(Listing<TourPackage>),
    Package(Box<TourPackage>),
    Posts(Listing<Post>),
    Post(Box<Post>),
    Categories(Vec<Category>),
    Images(Vec<PackageImage>),
    Admins(Vec<AdminUser>),
}

#[derive(Debug)]
struct CacheEntry {
    value: CacheValue,
    fetched_at: Instant,
    stale: AtomicBool,
}

/// Keyed store of server entities with staleness tracking.
///
/// Cloning is cheap (shared backing map). The client builds a default store,
/// but tests inject a fresh one per case via
/// [`WisataClient::with_cache`](crate::WisataClient::with_cache).
#[derive(Clone)]
pub struct ResourceCache {
    entries: Cache<CacheKey, Arc<CacheEntry>>,
    stale_after: Duration,
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceCache {
    /// Create a store with the standard 5-minute stale window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stale_after(STALE_AFTER)
    }

    /// Create a store with a custom stale window (used by tests).
    #[must_use]
    pub fn with_stale_after(stale_after: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(EVICT_AFTER)
            .build();
        Self {
            entries,
            stale_after,
        }
    }

    /// Look up a key. Returns the cached value plus its staleness: stale
    /// entries are still usable for display, but consumers should refetch.
    pub async fn get(&self, key: &CacheKey) -> Option<(CacheValue, bool)> {
        let entry = self.entries.get(key).await?;
        let stale = entry.stale.load(Ordering::Acquire)
            || entry.fetched_at.elapsed() >= self.stale_after;
        Some((entry.value.clone(), stale))
    }

    /// Store a freshly fetched value, clearing any staleness for the key.
    pub async fn insert(&self, key: CacheKey, value: CacheValue) {
        let entry = Arc::new(CacheEntry {
            value,
            fetched_at: Instant::now(),
            stale: AtomicBool::new(false),
        });
        self.entries.insert(key, entry).await;
        // Flush moka's internal buffers so a later invalidate() iteration is
        // guaranteed to see this entry.
        self.entries.run_pending_tasks().await;
    }

    /// Mark every entry for `resource` stale.
    ///
    /// Synchronous: once this returns, no consumer of the resource can read
    /// a fresh entry. Called from mutation success paths before they resolve.
    pub fn invalidate(&self, resource: Resource) {
        for (key, entry) in &self.entries {
            if key.resource == resource {
                entry.stale.store(true, Ordering::Release);
            }
        }
    }

    /// Drop a single entry (confirmed deletes).
    pub async fn remove(&self, key: &CacheKey) {
        self.entries.invalidate(key).await;
    }
}

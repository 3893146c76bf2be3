//! Tour package queries and mutations.

use serde_json::json;
use tracing::{debug, error, instrument};
use wisata_core::{Listing, PackageDraft, PackageId, TourPackage};

use crate::cache::{CacheKey, CacheValue, Resource};
use crate::client::WisataClient;
use crate::envelope;
use crate::error::ApiError;

/// Filter and pagination options for package list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub category_id: Option<wisata_core::CategoryId>,
    pub sort_by: Option<String>,
    /// Admin-scoped listing (includes inactive packages). Requires a token;
    /// without one the query fails fast instead of hitting the network.
    pub for_admin: bool,
}

impl PackageQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(is_active) = self.is_active {
            pairs.push(("isActive".to_string(), is_active.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category".to_string(), category_id.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort".to_string(), sort_by.clone()));
        }
        pairs
    }

    /// Stable serialization for the cache key. Admin-scoped results differ
    /// from public ones (inactive packages), so the scope is part of the key.
    fn cache_query(&self) -> String {
        let mut parts: Vec<String> = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if self.for_admin {
            parts.push("forAdmin".to_string());
        }
        parts.join("&")
    }
}

impl WisataClient {
    /// List tour packages, served from cache while fresh.
    ///
    /// A missing or malformed list payload yields an empty listing, never an
    /// error: listing pages must stay usable against a degraded API.
    ///
    /// # Errors
    ///
    /// Returns an error if an admin-scoped query has no token configured or
    /// the request fails after retries.
    #[instrument(skip(self))]
    pub async fn list_packages(
        &self,
        query: &PackageQuery,
    ) -> Result<Listing<TourPackage>, ApiError> {
        if query.for_admin {
            self.require_token()?;
        }

        let key = CacheKey::list(Resource::Packages, query.cache_query());
        if let Some((CacheValue::Packages(listing), stale)) = self.inner.cache.get(&key).await {
            if stale {
                debug!("stale cache entry, refetching packages");
            } else {
                debug!("cache hit for packages");
                return Ok(listing);
            }
        }

        let value = self
            .inner
            .http
            .get_json("/tour-packages", &query.query_pairs())
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch packages"))?;

        let items: Vec<TourPackage> = envelope::list_items(&value, &[]);
        let meta = envelope::page_meta(
            &value,
            query.page.unwrap_or(1),
            query.limit.unwrap_or(10),
            items.len(),
        );
        let listing = Listing { items, meta };

        self.inner
            .cache
            .insert(key, CacheValue::Packages(listing.clone()))
            .await;

        Ok(listing)
    }

    /// Get a single package by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the package does not exist, or an error if the
    /// request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_package(&self, id: PackageId) -> Result<TourPackage, ApiError> {
        let key = CacheKey::detail(Resource::Packages, id.as_i32());
        if let Some((CacheValue::Package(package), false)) = self.inner.cache.get(&key).await {
            debug!("cache hit for package");
            return Ok(*package);
        }

        let value = self
            .inner
            .http
            .get_json(&format!("/tour-packages/{id}"), &[])
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch package"))?;

        let package: TourPackage = envelope::item(value, &[])?;
        self.inner
            .cache
            .insert(key, CacheValue::Package(Box::new(package.clone())))
            .await;

        Ok(package)
    }

    /// Create a tour package.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    pub async fn create_package(&self, draft: &PackageDraft) -> Result<TourPackage, ApiError> {
        self.require_token()?;

        let value = self
            .inner
            .http
            .post_json("/tour-packages", draft)
            .await
            .inspect_err(|err| error!(error = %err, "failed to create package"))?;

        let package: TourPackage = envelope::item(value, &[])?;
        // List views must not serve pre-mutation data after this resolves.
        self.inner.cache.invalidate(Resource::Packages);
        debug!(id = %package.id, "package created");

        Ok(package)
    }

    /// Replace a tour package.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update_package(
        &self,
        id: PackageId,
        draft: &PackageDraft,
    ) -> Result<TourPackage, ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Packages, id.as_i32());

        let value = self
            .inner
            .http
            .put_json(&format!("/tour-packages/{id}"), draft)
            .await
            .inspect_err(|err| error!(error = %err, "failed to update package"))?;

        let package: TourPackage = envelope::item(value, &[])?;
        self.inner.cache.invalidate(Resource::Packages);
        self.inner
            .cache
            .remove(&CacheKey::detail(Resource::Packages, id.as_i32()))
            .await;
        debug!("package updated");

        Ok(package)
    }

    /// Delete a tour package.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the delete fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_package(&self, id: PackageId) -> Result<(), ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Packages, id.as_i32());

        self.inner
            .http
            .delete(&format!("/tour-packages/{id}"))
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete package"))?;

        self.inner
            .cache
            .remove(&CacheKey::detail(Resource::Packages, id.as_i32()))
            .await;
        self.inner.cache.invalidate(Resource::Packages);
        debug!("package deleted");

        Ok(())
    }

    /// Promote one gallery image URL to the package's main image.
    ///
    /// Sends only the `mainImageUrl` field; the caller never resupplies the
    /// rest of the package payload.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the update fails.
    #[instrument(skip(self, image_url), fields(id = %id))]
    pub async fn set_main_image(&self, id: PackageId, image_url: &str) -> Result<(), ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Packages, id.as_i32());

        self.inner
            .http
            .put_json(
                &format!("/tour-packages/{id}"),
                &json!({ "mainImageUrl": image_url }),
            )
            .await
            .inspect_err(|err| error!(error = %err, "failed to set main image"))?;

        self.inner.cache.invalidate(Resource::Packages);
        self.inner
            .cache
            .remove(&CacheKey::detail(Resource::Packages, id.as_i32()))
            .await;

        Ok(())
    }
}

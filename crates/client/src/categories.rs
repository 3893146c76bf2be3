//! Category queries and mutations.

use tracing::{debug, error, instrument};
use wisata_core::{Category, CategoryDraft, CategoryId};

use crate::cache::{CacheKey, CacheValue, Resource};
use crate::client::WisataClient;
use crate::envelope;
use crate::error::ApiError;

impl WisataClient {
    /// List all categories, served from cache while fresh. The category set
    /// is small and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after retries.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let key = CacheKey::list(Resource::Categories, "");
        if let Some((CacheValue::Categories(categories), stale)) = self.inner.cache.get(&key).await
        {
            if stale {
                debug!("stale cache entry, refetching categories");
            } else {
                debug!("cache hit for categories");
                return Ok(categories);
            }
        }

        let value = self
            .inner
            .http
            .get_json("/categories", &[])
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch categories"))?;

        let categories: Vec<Category> = envelope::list_items(&value, &[]);
        self.inner
            .cache
            .insert(key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.require_token()?;

        let value = self
            .inner
            .http
            .post_json("/categories", draft)
            .await
            .inspect_err(|err| error!(error = %err, "failed to create category"))?;

        let category: Category = envelope::item(value, &[])?;
        self.inner.cache.invalidate(Resource::Categories);
        debug!(id = %category.id, "category created");

        Ok(category)
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Categories, id.as_i32());

        let value = self
            .inner
            .http
            .put_json(&format!("/categories/{id}"), draft)
            .await
            .inspect_err(|err| error!(error = %err, "failed to update category"))?;

        let category: Category = envelope::item(value, &[])?;
        self.inner.cache.invalidate(Resource::Categories);
        debug!("category updated");

        Ok(category)
    }

    /// Delete a category. Whether packages referencing it block the delete is
    /// decided server-side; the error, if any, is surfaced as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the delete fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Categories, id.as_i32());

        self.inner
            .http
            .delete(&format!("/categories/{id}"))
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete category"))?;

        self.inner.cache.invalidate(Resource::Categories);
        debug!("category deleted");

        Ok(())
    }
}

//! Admin account management. Every operation here is token-gated.

use tracing::{debug, error, instrument};
use wisata_core::{AdminDraft, AdminPatch, AdminUser, AdminUserId};

use crate::cache::{CacheKey, CacheValue, Resource};
use crate::client::WisataClient;
use crate::envelope;
use crate::error::ApiError;

impl WisataClient {
    /// List admin accounts, served from cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the request fails after
    /// retries.
    #[instrument(skip(self))]
    pub async fn list_admins(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.require_token()?;

        let key = CacheKey::list(Resource::Admins, "");
        if let Some((CacheValue::Admins(admins), stale)) = self.inner.cache.get(&key).await {
            if stale {
                debug!("stale cache entry, refetching admins");
            } else {
                debug!("cache hit for admins");
                return Ok(admins);
            }
        }

        let value = self
            .inner
            .http
            .get_json("/admin", &[])
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch admins"))?;

        let admins: Vec<AdminUser> = envelope::list_items(&value, &["admins"]);
        self.inner
            .cache
            .insert(key, CacheValue::Admins(admins.clone()))
            .await;

        Ok(admins)
    }

    /// Register a new admin account.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn create_admin(&self, draft: &AdminDraft) -> Result<AdminUser, ApiError> {
        self.require_token()?;

        let value = self
            .inner
            .http
            .post_json("/admin/register", draft)
            .await
            .inspect_err(|err| error!(error = %err, "failed to create admin"))?;

        let admin: AdminUser = envelope::item(value, &["admins"])?;
        self.inner.cache.invalidate(Resource::Admins);
        debug!(id = %admin.id, "admin created");

        Ok(admin)
    }

    /// Update an admin account. Only fields present in the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update_admin(
        &self,
        id: AdminUserId,
        patch: &AdminPatch,
    ) -> Result<AdminUser, ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Admins, id.as_i32());

        let value = self
            .inner
            .http
            .put_json(&format!("/admin/{id}"), patch)
            .await
            .inspect_err(|err| error!(error = %err, "failed to update admin"))?;

        let admin: AdminUser = envelope::item(value, &["admins"])?;
        self.inner.cache.invalidate(Resource::Admins);
        debug!("admin updated");

        Ok(admin)
    }

    /// Delete an admin account.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the delete fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_admin(&self, id: AdminUserId) -> Result<(), ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Admins, id.as_i32());

        self.inner
            .http
            .delete(&format!("/admin/{id}"))
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete admin"))?;

        self.inner.cache.invalidate(Resource::Admins);
        debug!("admin deleted");

        Ok(())
    }
}

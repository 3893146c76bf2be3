//! Package gallery image queries and mutations.
//!
//! Uploading new images lives in [`crate::upload`]; this module covers
//! listing, deleting, and reordering what is already on the server.

use serde_json::json;
use tracing::{debug, error, instrument};
use wisata_core::{ImageId, PackageId, PackageImage};

use crate::cache::{CacheKey, CacheValue, Resource};
use crate::client::WisataClient;
use crate::envelope;
use crate::error::ApiError;

impl WisataClient {
    /// List the gallery images of a package, served from cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after retries.
    #[instrument(skip(self), fields(package_id = %package_id))]
    pub async fn list_package_images(
        &self,
        package_id: PackageId,
    ) -> Result<Vec<PackageImage>, ApiError> {
        let key = CacheKey::list(
            Resource::PackageImages,
            format!("package:{package_id}"),
        );
        if let Some((CacheValue::Images(images), false)) = self.inner.cache.get(&key).await {
            debug!("cache hit for package images");
            return Ok(images);
        }

        let images = self.fetch_package_images(package_id).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Images(images.clone()))
            .await;

        Ok(images)
    }

    /// Fetch the gallery directly, bypassing the cache. The upload
    /// coordinator needs the live count to assign display orders.
    pub(crate) async fn fetch_package_images(
        &self,
        package_id: PackageId,
    ) -> Result<Vec<PackageImage>, ApiError> {
        let value = self
            .inner
            .http
            .get_json(&format!("/tour-packages/{package_id}/images"), &[])
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch package images"))?;

        Ok(envelope::list_items(&value, &["images"]))
    }

    /// Delete one gallery image.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the delete fails.
    #[instrument(skip(self), fields(image_id = %image_id))]
    pub async fn delete_package_image(&self, image_id: ImageId) -> Result<(), ApiError> {
        self.require_token()?;
        let _pending = self
            .inner
            .pending
            .begin(Resource::PackageImages, image_id.as_i32());

        self.inner
            .http
            .delete(&format!("/tour-packages/images/{image_id}"))
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete package image"))?;

        self.inner.cache.invalidate(Resource::PackageImages);
        debug!("package image deleted");

        Ok(())
    }

    /// Move one gallery image to a new position.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the update fails.
    #[instrument(skip(self), fields(image_id = %image_id, display_order))]
    pub async fn reorder_package_image(
        &self,
        image_id: ImageId,
        display_order: u32,
    ) -> Result<PackageImage, ApiError> {
        self.require_token()?;
        let _pending = self
            .inner
            .pending
            .begin(Resource::PackageImages, image_id.as_i32());

        let value = self
            .inner
            .http
            .put_json(
                &format!("/tour-packages/images/{image_id}"),
                &json!({ "displayOrder": display_order }),
            )
            .await
            .inspect_err(|err| error!(error = %err, "failed to reorder package image"))?;

        let image: PackageImage = envelope::item(value, &["image"])?;
        self.inner.cache.invalidate(Resource::PackageImages);

        Ok(image)
    }
}

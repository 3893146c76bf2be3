//! Multi-file gallery upload coordinator.
//!
//! Files upload sequentially, one request per file, so display orders stay
//! deterministic: the server assigns ids, the client assigns positions
//! continuing after the existing gallery. A failed file is recorded and the
//! batch continues; the cache is invalidated once per batch, not per file.

use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument, warn};
use wisata_core::{PackageId, PackageImage};

use crate::cache::Resource;
use crate::client::WisataClient;
use crate::envelope;
use crate::error::ApiError;

/// An image file staged for upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One file that failed to upload, with the error that stopped it.
#[derive(Debug)]
pub struct FailedUpload {
    pub file_name: String,
    pub error: ApiError,
}

/// Outcome of an upload batch. A partial failure is not an `Err`: the
/// successfully uploaded images are real and the caller gets both halves.
#[derive(Debug)]
pub struct UploadReport {
    pub uploaded: Vec<PackageImage>,
    pub failed: Vec<FailedUpload>,
    pub total: usize,
}

impl UploadReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Human-readable batch outcome, e.g. `"2 of 3 images uploaded"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} of {} images uploaded", self.uploaded.len(), self.total)
    }
}

impl WisataClient {
    /// Upload a batch of gallery images for a package.
    ///
    /// Display orders continue after the current gallery: with `n` existing
    /// images, the batch gets orders `n + 1`, `n + 2`, and so on in input
    /// order. Individual failures do not abort the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the existing gallery
    /// cannot be fetched; per-file failures land in the report instead.
    #[instrument(skip(self, files), fields(package_id = %package_id, total = files.len()))]
    pub async fn upload_package_images(
        &self,
        package_id: PackageId,
        files: Vec<ImageFile>,
    ) -> Result<UploadReport, ApiError> {
        self.require_token()?;

        let existing = self.fetch_package_images(package_id).await?.len();
        let total = files.len();
        let mut uploaded = Vec::new();
        let mut failed = Vec::new();

        for (position, file) in files.into_iter().enumerate() {
            let display_order = existing + position + 1;
            let file_name = file.file_name.clone();
            match self.upload_single_image(package_id, file, display_order).await {
                Ok(image) => {
                    debug!(file_name, display_order, "image uploaded");
                    uploaded.push(image);
                }
                Err(error) => {
                    warn!(file_name, error = %error, "image upload failed, continuing batch");
                    failed.push(FailedUpload { file_name, error });
                }
            }
        }

        if total > 0 {
            self.inner.cache.invalidate(Resource::PackageImages);
        }

        let report = UploadReport {
            uploaded,
            failed,
            total,
        };
        if !report.is_complete() {
            warn!(summary = %report.summary(), "upload batch finished with failures");
        }

        Ok(report)
    }

    async fn upload_single_image(
        &self,
        package_id: PackageId,
        file: ImageFile,
        display_order: usize,
    ) -> Result<PackageImage, ApiError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = Form::new()
            .text("displayOrder", display_order.to_string())
            .part("image", part);

        let value = self
            .inner
            .http
            .post_multipart(&format!("/tour-packages/{package_id}/images"), form)
            .await?;

        envelope::item(value, &["image"])
    }
}

//! Package gallery image commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use thiserror::Error;
use wisata_client::{ApiError, ImageFile, WisataClient};
use wisata_core::{ImageId, PackageId};

#[derive(Debug, Error)]
pub enum ImageCommandError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Subcommand)]
pub enum ImageAction {
    /// List the gallery of a package
    List {
        /// Package id
        package_id: i32,
    },
    /// Upload image files to a package's gallery
    Upload {
        /// Package id
        package_id: i32,

        /// Image files to upload, in gallery order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Delete a gallery image
    Delete {
        /// Image id
        image_id: i32,
    },
    /// Move a gallery image to a new position
    Reorder {
        /// Image id
        image_id: i32,

        /// New display order (1-based)
        display_order: u32,
    },
}

pub async fn run(client: &WisataClient, action: ImageAction) -> Result<(), ImageCommandError> {
    match action {
        ImageAction::List { package_id } => {
            let images = client.list_package_images(PackageId::new(package_id)).await?;
            for image in &images {
                tracing::info!(
                    "  [{}] #{} {}",
                    image.id,
                    image.display_order,
                    client.config().resolve_image_url(&image.image_url)
                );
            }
            tracing::info!("{} images", images.len());
        }
        ImageAction::Upload { package_id, files } => {
            let mut staged = Vec::with_capacity(files.len());
            for path in files {
                let bytes =
                    std::fs::read(&path).map_err(|e| ImageCommandError::Read(path.clone(), e))?;
                staged.push(ImageFile {
                    file_name: path
                        .file_name()
                        .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned()),
                    content_type: content_type_for(&path).to_string(),
                    bytes,
                });
            }

            let report = client
                .upload_package_images(PackageId::new(package_id), staged)
                .await?;
            tracing::info!("{}", report.summary());
            for failure in &report.failed {
                tracing::warn!("  {} failed: {}", failure.file_name, failure.error);
            }
        }
        ImageAction::Delete { image_id } => {
            client.delete_package_image(ImageId::new(image_id)).await?;
            tracing::info!("Image {image_id} deleted");
        }
        ImageAction::Reorder {
            image_id,
            display_order,
        } => {
            client
                .reorder_package_image(ImageId::new(image_id), display_order)
                .await?;
            tracing::info!("Image {image_id} moved to position {display_order}");
        }
    }
    Ok(())
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type_for(Path::new("a.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("noext")), "image/jpeg");
    }
}

//! Tour package commands.

use clap::Subcommand;
use wisata_client::{ApiError, PackageQuery, WisataClient};
use wisata_core::PackageId;

#[derive(Subcommand)]
pub enum PackageAction {
    /// List tour packages
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Full-text search term
        #[arg(long)]
        search: Option<String>,

        /// Filter by category id
        #[arg(long)]
        category: Option<i32>,

        /// Include inactive packages (requires a token)
        #[arg(long)]
        admin: bool,
    },
    /// Show one package
    Get {
        /// Package id
        id: i32,
    },
    /// Delete a package
    Delete {
        /// Package id
        id: i32,
    },
    /// Promote a gallery image URL to the package's main image
    SetMainImage {
        /// Package id
        id: i32,

        /// Image URL to promote
        url: String,
    },
}

pub async fn run(client: &WisataClient, action: PackageAction) -> Result<(), ApiError> {
    match action {
        PackageAction::List {
            page,
            limit,
            search,
            category,
            admin,
        } => {
            let query = PackageQuery {
                page,
                limit,
                search,
                category_id: category.map(Into::into),
                for_admin: admin,
                ..PackageQuery::default()
            };
            let listing = client.list_packages(&query).await?;
            tracing::info!(
                "page {} of {} ({} packages total)",
                listing.meta.page,
                listing.meta.total_pages(),
                listing.meta.count
            );
            for package in &listing.items {
                tracing::info!(
                    "  [{}] {} ({}) - {} - active: {}",
                    package.id,
                    package.title,
                    package.slug,
                    package.price,
                    package.is_active
                );
            }
        }
        PackageAction::Get { id } => {
            let package = client.get_package(PackageId::new(id)).await?;
            tracing::info!("[{}] {}", package.id, package.title);
            tracing::info!("  slug: {}", package.slug);
            tracing::info!("  price: {}", package.price);
            tracing::info!("  duration: {}", package.duration);
            tracing::info!("  active: {}", package.is_active);
            if let Some(url) = &package.main_image_url {
                tracing::info!("  main image: {}", client.config().resolve_image_url(url));
            }
            for feature in &package.features {
                tracing::info!("  - {feature}");
            }
        }
        PackageAction::Delete { id } => {
            client.delete_package(PackageId::new(id)).await?;
            tracing::info!("Package {id} deleted");
        }
        PackageAction::SetMainImage { id, url } => {
            client.set_main_image(PackageId::new(id), &url).await?;
            tracing::info!("Main image updated for package {id}");
        }
    }
    Ok(())
}

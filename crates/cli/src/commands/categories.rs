//! Category commands.

use clap::Subcommand;
use wisata_client::{ApiError, WisataClient};
use wisata_core::{CategoryDraft, CategoryId};

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List all categories
    List,
    /// Create a category
    Create {
        /// Category name
        #[arg(short, long)]
        name: String,

        /// URL slug
        #[arg(short, long)]
        slug: String,
    },
    /// Update a category
    Update {
        /// Category id
        id: i32,

        /// Category name
        #[arg(short, long)]
        name: String,

        /// URL slug
        #[arg(short, long)]
        slug: String,
    },
    /// Delete a category
    Delete {
        /// Category id
        id: i32,
    },
}

pub async fn run(client: &WisataClient, action: CategoryAction) -> Result<(), ApiError> {
    match action {
        CategoryAction::List => {
            let categories = client.list_categories().await?;
            for category in &categories {
                tracing::info!("  [{}] {} ({})", category.id, category.name, category.slug);
            }
            tracing::info!("{} categories", categories.len());
        }
        CategoryAction::Create { name, slug } => {
            let category = client.create_category(&CategoryDraft { name, slug }).await?;
            tracing::info!("Category created with id {}", category.id);
        }
        CategoryAction::Update { id, name, slug } => {
            client
                .update_category(CategoryId::new(id), &CategoryDraft { name, slug })
                .await?;
            tracing::info!("Category {id} updated");
        }
        CategoryAction::Delete { id } => {
            client.delete_category(CategoryId::new(id)).await?;
            tracing::info!("Category {id} deleted");
        }
    }
    Ok(())
}

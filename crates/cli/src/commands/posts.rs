//! Post commands.

use clap::Subcommand;
use wisata_client::{ApiError, PostQuery, WisataClient};
use wisata_core::{PostId, PostStatus, PostType};

#[derive(Subcommand)]
pub enum PostAction {
    /// List posts
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Filter by type (`blog`, `catalog`, `news`, `information`)
        #[arg(long, value_parser = parse_post_type)]
        post_type: Option<PostType>,

        /// Filter by status (`draft`, `published`)
        #[arg(long, value_parser = parse_post_status)]
        status: Option<PostStatus>,

        /// Include drafts (requires a token)
        #[arg(long)]
        admin: bool,
    },
    /// Show one post by id
    Get {
        /// Post id
        id: i32,
    },
    /// Show one post by slug
    GetBySlug {
        /// Post slug
        slug: String,
    },
    /// Delete a post
    Delete {
        /// Post id
        id: i32,
    },
}

fn parse_post_type(s: &str) -> Result<PostType, String> {
    match s.to_ascii_uppercase().as_str() {
        "BLOG" => Ok(PostType::Blog),
        "CATALOG" => Ok(PostType::Catalog),
        "NEWS" => Ok(PostType::News),
        "INFORMATION" => Ok(PostType::Information),
        other => Err(format!("unknown post type: {other}")),
    }
}

fn parse_post_status(s: &str) -> Result<PostStatus, String> {
    match s.to_ascii_uppercase().as_str() {
        "DRAFT" => Ok(PostStatus::Draft),
        "PUBLISHED" => Ok(PostStatus::Published),
        other => Err(format!("unknown post status: {other}")),
    }
}

pub async fn run(client: &WisataClient, action: PostAction) -> Result<(), ApiError> {
    match action {
        PostAction::List {
            page,
            limit,
            post_type,
            status,
            admin,
        } => {
            let query = PostQuery {
                page,
                limit,
                post_type,
                status,
                for_admin: admin,
                ..PostQuery::default()
            };
            let listing = client.list_posts(&query).await?;
            tracing::info!(
                "page {} of {} ({} posts total)",
                listing.meta.page,
                listing.meta.total_pages(),
                listing.meta.count
            );
            for post in &listing.items {
                tracing::info!(
                    "  [{}] {} ({}) - {} {}",
                    post.id,
                    post.title,
                    post.slug,
                    post.post_type.as_str(),
                    post.status.as_str()
                );
            }
        }
        PostAction::Get { id } => {
            let post = client.get_post(PostId::new(id)).await?;
            print_post(&post);
        }
        PostAction::GetBySlug { slug } => {
            let post = client.get_post_by_slug(&slug).await?;
            print_post(&post);
        }
        PostAction::Delete { id } => {
            client.delete_post(PostId::new(id)).await?;
            tracing::info!("Post {id} deleted");
        }
    }
    Ok(())
}

fn print_post(post: &wisata_core::Post) {
    tracing::info!("[{}] {}", post.id, post.title);
    tracing::info!("  slug: {}", post.slug);
    tracing::info!("  type: {}", post.post_type.as_str());
    tracing::info!("  status: {}", post.status.as_str());
    for url in &post.image_urls {
        tracing::info!("  image: {url}");
    }
}

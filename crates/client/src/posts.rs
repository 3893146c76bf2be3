//! Post queries and mutations.
//!
//! Post create/update are multipart requests: text fields plus any number of
//! attached image files under the repeated `images` part.

use reqwest::multipart::{Form, Part};
use tracing::{debug, error, instrument};
use wisata_core::{Listing, Post, PostDraft, PostId, PostPatch, PostStatus, PostType};

use crate::cache::{CacheKey, CacheValue, Resource};
use crate::client::WisataClient;
use crate::envelope;
use crate::error::ApiError;
use crate::upload::ImageFile;

/// Filter and pagination options for post list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub post_type: Option<PostType>,
    pub status: Option<PostStatus>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    /// Admin-scoped listing (includes drafts). Requires a token.
    pub for_admin: bool,
}

impl PostQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(post_type) = self.post_type {
            pairs.push(("type".to_string(), post_type.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort".to_string(), sort_by.clone()));
        }
        pairs
    }

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

fn draft_form(draft: &PostDraft) -> Form {
    Form::new()
        .text("title", draft.title.clone())
        .text("slug", draft.slug.clone())
        .text("body", draft.body.clone())
        .text("type", draft.post_type.as_str())
        .text("status", draft.status.as_str())
}

fn patch_form(patch: &PostPatch) -> Form {
    let mut form = Form::new();
    if let Some(title) = &patch.title {
        form = form.text("title", title.clone());
    }
    if let Some(slug) = &patch.slug {
        form = form.text("slug", slug.clone());
    }
    if let Some(body) = &patch.body {
        form = form.text("body", body.clone());
    }
    if let Some(post_type) = patch.post_type {
        form = form.text("type", post_type.as_str());
    }
    if let Some(status) = patch.status {
        form = form.text("status", status.as_str());
    }
    form
}

fn attach_images(mut form: Form, images: Vec<ImageFile>) -> Result<Form, ApiError> {
    for image in images {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;
        form = form.part("images", part);
    }
    Ok(form)
}

impl WisataClient {
    /// List posts, served from cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if an admin-scoped query has no token configured or
    /// the request fails after retries.
    #[instrument(skip(self))]
    pub async fn list_posts(&self, query: &PostQuery) -> Result<Listing<Post>, ApiError> {
        if query.for_admin {
            self.require_token()?;
        }

        let key = CacheKey::list(Resource::Posts, query.cache_query());
        if let Some((CacheValue::Posts(listing), stale)) = self.inner.cache.get(&key).await {
            if stale {
                debug!("stale cache entry, refetching posts");
            } else {
                debug!("cache hit for posts");
                return Ok(listing);
            }
        }

        let value = self
            .inner
            .http
            .get_json("/posts", &query.query_pairs())
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch posts"))?;

        let items: Vec<Post> = envelope::list_items(&value, &["posts"]);
        let meta = envelope::page_meta(
            &value,
            query.page.unwrap_or(1),
            query.limit.unwrap_or(10),
            items.len(),
        );
        let listing = Listing { items, meta };

        self.inner
            .cache
            .insert(key, CacheValue::Posts(listing.clone()))
            .await;

        Ok(listing)
    }

    /// Get a single post by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the post does not exist, or an error if the
    /// request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        let key = CacheKey::detail(Resource::Posts, id.as_i32());
        if let Some((CacheValue::Post(post), false)) = self.inner.cache.get(&key).await {
            debug!("cache hit for post");
            return Ok(*post);
        }

        let value = self
            .inner
            .http
            .get_json(&format!("/posts/{id}"), &[])
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch post"))?;

        let post: Post = envelope::item(value, &["post"])?;
        self.inner
            .cache
            .insert(key, CacheValue::Post(Box::new(post.clone())))
            .await;

        Ok(post)
    }

    /// Get a single published post by slug (public detail pages).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no post has this slug, or an error if the
    /// request fails.
    #[instrument(skip(self))]
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Post, ApiError> {
        let key = CacheKey::list(Resource::Posts, format!("slug:{slug}"));
        if let Some((CacheValue::Post(post), false)) = self.inner.cache.get(&key).await {
            debug!("cache hit for post by slug");
            return Ok(*post);
        }

        let value = self
            .inner
            .http
            .get_json(&format!("/posts/slug/{slug}"), &[])
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch post by slug"))?;

        let post: Post = envelope::item(value, &["post"])?;
        self.inner
            .cache
            .insert(key, CacheValue::Post(Box::new(post.clone())))
            .await;

        Ok(post)
    }

    /// Create a post, optionally with attached images.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, draft, images), fields(slug = %draft.slug, images = images.len()))]
    pub async fn create_post(
        &self,
        draft: &PostDraft,
        images: Vec<ImageFile>,
    ) -> Result<Post, ApiError> {
        self.require_token()?;

        let form = attach_images(draft_form(draft), images)?;
        let value = self
            .inner
            .http
            .post_multipart("/posts", form)
            .await
            .inspect_err(|err| error!(error = %err, "failed to create post"))?;

        let post: Post = envelope::item(value, &["post"])?;
        self.inner.cache.invalidate(Resource::Posts);
        debug!(id = %post.id, "post created");

        Ok(post)
    }

    /// Update a post. Only fields present in the patch are sent; new images
    /// are appended to the post's gallery.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the server rejects the
    /// payload.
    #[instrument(skip(self, patch, images), fields(id = %id))]
    pub async fn update_post(
        &self,
        id: PostId,
        patch: &PostPatch,
        images: Vec<ImageFile>,
    ) -> Result<Post, ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Posts, id.as_i32());

        let form = attach_images(patch_form(patch), images)?;
        let value = self
            .inner
            .http
            .put_multipart(&format!("/posts/{id}"), form)
            .await
            .inspect_err(|err| error!(error = %err, "failed to update post"))?;

        let post: Post = envelope::item(value, &["post"])?;
        self.inner.cache.invalidate(Resource::Posts);
        self.inner
            .cache
            .remove(&CacheKey::detail(Resource::Posts, id.as_i32()))
            .await;
        debug!("post updated");

        Ok(post)
    }

    /// Delete a post (soft delete on the server).
    ///
    /// # Errors
    ///
    /// Returns an error if no token is configured or the delete fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        self.require_token()?;
        let _pending = self.inner.pending.begin(Resource::Posts, id.as_i32());

        self.inner
            .http
            .delete(&format!("/posts/{id}"))
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete post"))?;

        self.inner
            .cache
            .remove(&CacheKey::detail(Resource::Posts, id.as_i32()))
            .await;
        self.inner.cache.invalidate(Resource::Posts);
        debug!("post deleted");

        Ok(())
    }
}

//! Normalization of the API's `{message, meta, data}` response envelopes.
//!
//! The envelope is duck-typed in practice: list payloads arrive under `data`,
//! `posts`, or `admins` depending on the resource, single entities under
//! `data`, `post`, or `admins`, and a few endpoints return a bare array.
//! This module is the single seam that absorbs the inconsistency.
//!
//! Malformed or missing list payloads normalize to an **empty list** rather
//! than an error, so listing pages stay usable against a degraded API.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use wisata_core::PageMeta;

use crate::error::ApiError;

/// Extract a list payload, trying `data`, then `alt_keys`, then a bare
/// top-level array. Anything else yields an empty vector.
pub(crate) fn list_items<T: DeserializeOwned>(value: &Value, alt_keys: &[&str]) -> Vec<T> {
    let candidate = std::iter::once("data")
        .chain(alt_keys.iter().copied())
        .find_map(|key| value.get(key).filter(|v| v.is_array()))
        .or_else(|| value.is_array().then_some(value));

    let Some(array) = candidate else {
        warn!("response envelope has no list payload, treating as empty");
        return Vec::new();
    };

    serde_json::from_value(array.clone()).unwrap_or_else(|err| {
        warn!(error = %err, "list payload failed to deserialize, treating as empty");
        Vec::new()
    })
}

/// Extract a single-entity payload, trying `data`, then `alt_keys`, then the
/// whole value (`result.data ?? result`).
pub(crate) fn item<T: DeserializeOwned>(value: Value, alt_keys: &[&str]) -> Result<T, ApiError> {
    let payload = std::iter::once("data")
        .chain(alt_keys.iter().copied())
        .find_map(|key| value.get(key).filter(|v| !v.is_null()))
        .cloned()
        .unwrap_or(value);

    serde_json::from_value(payload).map_err(ApiError::from)
}

/// Extract pagination metadata, falling back to the requested page/limit and
/// the actual item count when the envelope has no usable `meta`.
pub(crate) fn page_meta(value: &Value, page: u32, limit: u32, item_count: usize) -> PageMeta {
    value
        .get("meta")
        .and_then(|meta| serde_json::from_value(meta.clone()).ok())
        .unwrap_or(PageMeta {
            page,
            limit,
            count: item_count as u64,
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wisata_core::Category;

    use super::*;

    #[test]
    fn test_list_under_data() {
        let value = json!({"message": "ok", "data": [{"id": 1, "name": "Hiking", "slug": "hiking"}]});
        let items: Vec<Category> = list_items(&value, &[]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_list_under_alias() {
        let value = json!({"message": "ok", "admins": [{"id": 1, "email": "a@b.c", "role": "SUPER"}]});
        let items: Vec<wisata_core::AdminUser> = list_items(&value, &["admins"]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_bare_array() {
        let value = json!([{"id": 1, "name": "Hiking", "slug": "hiking"}]);
        let items: Vec<Category> = list_items(&value, &[]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_missing_payload_is_empty() {
        let value = json!({"message": "ok"});
        let items: Vec<Category> = list_items(&value, &[]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_empty() {
        let value = json!({"data": [{"bogus": true}]});
        let items: Vec<Category> = list_items(&value, &[]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_item_falls_back_to_whole_value() {
        let value = json!({"id": 1, "name": "Hiking", "slug": "hiking"});
        let category: Category = item(value, &[]).expect("parses");
        assert_eq!(category.name, "Hiking");
    }

    #[test]
    fn test_item_prefers_data() {
        let value = json!({"message": "ok", "data": {"id": 2, "name": "Diving", "slug": "diving"}});
        let category: Category = item(value, &[]).expect("parses");
        assert_eq!(category.slug, "diving");
    }

    #[test]
    fn test_meta_fallback_uses_requested_values() {
        let meta = page_meta(&json!({"message": "ok"}), 3, 20, 4);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.limit, 20);
        assert_eq!(meta.count, 4);
    }

    #[test]
    fn test_meta_parsed_when_present() {
        let meta = page_meta(&json!({"meta": {"page": 2, "limit": 5, "count": 7}}), 1, 10, 0);
        assert_eq!(meta.total_pages(), 2);
    }
}

//! Tour packages and their gallery images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::category::Category;
use crate::types::{CategoryId, ImageId, PackageId, Price};

/// A tour package as returned by the API.
///
/// `price` is normalized at deserialization time: the API returns it as a
/// numeric string on some endpoints and as a plain number on others.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    pub id: PackageId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    pub price: Price,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub main_image_url: Option<String>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub is_active: bool,
    /// Ordered list of selling points shown on the detail page.
    #[serde(default)]
    pub features: Vec<String>,
    /// Denormalized category reference, present on detail responses.
    #[serde(default)]
    pub category: Option<Category>,
    /// Gallery images, present on detail responses.
    #[serde(default)]
    pub images: Option<Vec<PackageImage>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A gallery image owned by a package.
///
/// `display_order` defines the gallery sequence; ties are broken by insertion
/// order on the server. At most one image's URL per package is promoted to
/// `TourPackage::main_image_url` - that is a denormalized pointer, not
/// ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageImage {
    pub id: ImageId,
    pub image_url: String,
    #[serde(default)]
    pub display_order: i32,
    pub package_id: PackageId,
}

/// Payload for creating or replacing a package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDraft {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub price: Price,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image_url: Option<String>,
    pub category_id: CategoryId,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_deserializes_string_price() {
        let json = r#"{
            "id": 5,
            "title": "Bromo Sunrise",
            "slug": "bromo-sunrise",
            "price": "1500000",
            "categoryId": 2,
            "isActive": true
        }"#;
        let pkg: TourPackage = serde_json::from_str(json).expect("parses");
        assert_eq!(pkg.price, Price::from(1_500_000));
        assert_eq!(pkg.id, PackageId::new(5));
        assert!(pkg.main_image_url.is_none());
        assert!(pkg.features.is_empty());
    }

    #[test]
    fn test_package_deserializes_numeric_price() {
        let json = r#"{
            "id": 6,
            "title": "Ijen Crater",
            "slug": "ijen-crater",
            "price": 2750000,
            "categoryId": 2
        }"#;
        let pkg: TourPackage = serde_json::from_str(json).expect("parses");
        assert_eq!(pkg.price, Price::from(2_750_000));
        assert!(!pkg.is_active);
    }

    #[test]
    fn test_image_display_order_defaults_to_zero() {
        let json = r#"{"id": 1, "imageUrl": "/img/a.png", "packageId": 5}"#;
        let img: PackageImage = serde_json::from_str(json).expect("parses");
        assert_eq!(img.display_order, 0);
    }
}

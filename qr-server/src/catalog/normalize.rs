//! Catalog Normalizer
//!
//! Validates and shapes a stored catalog document for rendering:
//! - per item, the "valid image list": image URLs minus transient
//!   local-preview (`blob:`) references, falling back to the legacy single
//!   `image` field when the filtered list comes up empty
//! - per item, today-availability from a caller-supplied weekday name
//!   (absent day means available)
//! - category/item insertion order is user-controlled and preserved as-is
//!
//! Normalization is idempotent: running it over an already-normalized
//! document yields identical output.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use shared::models::{Catalog, CatalogItem, Variant};

/// Transient local-preview URL scheme; such references only ever existed in
/// the editor session that produced them
const LOCAL_BLOB_SCHEME: &str = "blob:";

/// Catalog item shaped for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    /// Valid (non-transient) image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Carried through so re-normalization sees the same inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<HashMap<String, bool>>,
    pub available_today: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Category shaped for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<NormalizedItem>,
}

/// Catalog shaped for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCatalog {
    #[serde(default)]
    pub categories: Vec<NormalizedCategory>,
    pub currency: String,
    pub orderable: bool,
}

impl NormalizedCatalog {
    /// Whether any category still has items to show
    pub fn has_items(&self) -> bool {
        self.categories.iter().any(|c| !c.items.is_empty())
    }
}

/// Filter out transient local-preview references; fall back to the legacy
/// single-image field only when the filtered list is empty
pub fn valid_images(item: &CatalogItem) -> Vec<String> {
    let filtered: Vec<String> = item
        .images
        .iter()
        .filter(|url| !url.starts_with(LOCAL_BLOB_SCHEME))
        .cloned()
        .collect();

    if !filtered.is_empty() {
        return filtered;
    }

    match &item.image {
        Some(url) if !url.is_empty() && !url.starts_with(LOCAL_BLOB_SCHEME) => {
            vec![url.clone()]
        }
        _ => Vec::new(),
    }
}

/// Availability for the given lowercase weekday name. A missing map or a
/// missing day entry means available.
fn is_available_on(item: &CatalogItem, weekday: &str) -> bool {
    match &item.availability {
        Some(days) => days.get(weekday).copied().unwrap_or(true),
        None => true,
    }
}

/// Shape one item for rendering
pub fn normalize_item(item: &CatalogItem, weekday: &str) -> NormalizedItem {
    NormalizedItem {
        name: item.name.clone(),
        description: item.description.clone(),
        price: item.price,
        images: valid_images(item),
        availability: item.availability.clone(),
        available_today: is_available_on(item, weekday),
        variants: item.variants.clone(),
    }
}

/// Shape a whole catalog for rendering, preserving stored ordering
pub fn normalize_catalog(catalog: &Catalog, weekday: &str) -> NormalizedCatalog {
    NormalizedCatalog {
        categories: catalog
            .categories
            .iter()
            .map(|category| NormalizedCategory {
                name: category.name.clone(),
                items: category
                    .items
                    .iter()
                    .map(|item| normalize_item(item, weekday))
                    .collect(),
            })
            .collect(),
        currency: catalog.currency.clone(),
        orderable: catalog.orderable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_from(value: serde_json::Value) -> CatalogItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_blob_images_filtered() {
        let item = item_from(json!({
            "name": "Burger",
            "images": ["blob:http://localhost/123", "https://cdn.example.com/burger.jpg"]
        }));
        assert_eq!(
            valid_images(&item),
            vec!["https://cdn.example.com/burger.jpg".to_string()]
        );
    }

    #[test]
    fn test_legacy_image_fallback() {
        let item = item_from(json!({
            "name": "Burger",
            "images": ["blob:http://localhost/123"],
            "image": "https://cdn.example.com/legacy.jpg"
        }));
        assert_eq!(
            valid_images(&item),
            vec!["https://cdn.example.com/legacy.jpg".to_string()]
        );
    }

    #[test]
    fn test_no_valid_images_yields_empty() {
        let item = item_from(json!({
            "name": "Burger",
            "images": ["blob:http://localhost/123"],
            "image": "blob:http://localhost/456"
        }));
        assert!(valid_images(&item).is_empty());
    }

    #[test]
    fn test_legacy_not_used_when_filtered_nonempty() {
        let item = item_from(json!({
            "name": "Burger",
            "images": ["https://cdn.example.com/a.jpg"],
            "image": "https://cdn.example.com/legacy.jpg"
        }));
        assert_eq!(
            valid_images(&item),
            vec!["https://cdn.example.com/a.jpg".to_string()]
        );
    }

    #[test]
    fn test_availability_defaults() {
        let item = item_from(json!({"name": "Burger"}));
        assert!(is_available_on(&item, "monday"));

        let item = item_from(json!({
            "name": "Couscous",
            "availability": {"friday": true, "monday": false}
        }));
        assert!(is_available_on(&item, "friday"));
        assert!(!is_available_on(&item, "monday"));
        // Absent day entry means available
        assert!(is_available_on(&item, "tuesday"));
    }

    #[test]
    fn test_ordering_preserved() {
        let catalog = Catalog::from_value(json!({
            "categories": [
                {"name": "Zeta", "items": [{"name": "z1"}, {"name": "a1"}]},
                {"name": "Alpha", "items": [{"name": "m1"}]}
            ]
        }));
        let normalized = normalize_catalog(&catalog, "monday");
        assert_eq!(normalized.categories[0].name, "Zeta");
        assert_eq!(normalized.categories[0].items[0].name, "z1");
        assert_eq!(normalized.categories[0].items[1].name, "a1");
        assert_eq!(normalized.categories[1].name, "Alpha");
    }

    #[test]
    fn test_malformed_document_yields_empty_catalog() {
        let catalog = Catalog::from_value(json!({"nope": true, "categories": 9}));
        let normalized = normalize_catalog(&catalog, "monday");
        assert!(normalized.categories.is_empty());
        assert!(!normalized.has_items());
    }

    #[test]
    fn test_normalization_idempotent() {
        let catalog = Catalog::from_value(json!({
            "categories": [{
                "name": "Mains",
                "items": [{
                    "name": "Tajine",
                    "price": 750.0,
                    "images": ["blob:http://localhost/9", "https://cdn.example.com/t.jpg"],
                    "image": "https://cdn.example.com/legacy.jpg",
                    "availability": {"sunday": false},
                    "variants": [{"name": "Size", "options": [{"name": "L", "price": 100.0}]}]
                }]
            }],
            "currency": "DZD",
            "orderable": true
        }));

        let once = normalize_catalog(&catalog, "sunday");
        // Feed the normalized output back through the read boundary
        let reparsed = Catalog::from_value(serde_json::to_value(&once).unwrap());
        let twice = normalize_catalog(&reparsed, "sunday");
        assert_eq!(once, twice);
    }
}

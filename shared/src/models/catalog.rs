//! Catalog Model
//!
//! The category/item structure embedded in a QR code document, for both the
//! menu mode (categories) and the products mode (flat item list). Stored
//! documents are loosely typed; [`Catalog::from_value`] and
//! [`CatalogItem::list_from_value`] are the read-boundary validators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Selection of variant options: variant name -> chosen option name.
/// Partial and empty selections are valid; unknown names contribute nothing.
pub type VariantSelection = HashMap<String, String>;

/// Variant option (embedded in Variant)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariantOption {
    pub name: String,
    /// Price surcharge in currency units (signed; negative = reduction)
    #[serde(default)]
    pub price: f64,
}

/// A customization axis (e.g. "Size") with its selectable options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub options: Vec<VariantOption>,
}

/// Catalog item (menu dish or showcased product)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Base price in currency units (non-negative)
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Legacy single-image field, superseded by `images`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Lowercase weekday name -> available. Absent day means available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<HashMap<String, bool>>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl CatalogItem {
    /// Validate a stored flat product list. Malformed input yields an empty
    /// list rather than failing the page.
    pub fn list_from_value(value: serde_json::Value) -> Vec<CatalogItem> {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Menu category with its items (insertion order is user-controlled)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// Catalog: ordered categories plus display/ordering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Gates whether quantity/checkout controls appear
    #[serde(default)]
    pub orderable: bool,
}

fn default_currency() -> String {
    "DZD".to_string()
}

impl Catalog {
    /// Validate a stored menu document. A malformed document (missing or
    /// ill-typed `categories`) yields an empty catalog rather than failing
    /// the whole page.
    pub fn from_value(value: serde_json::Value) -> Catalog {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Whether the catalog has at least one category with at least one item
    pub fn has_items(&self) -> bool {
        self.categories.iter().any(|c| !c.items.is_empty())
    }
}

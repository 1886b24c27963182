//! Catalog Module
//!
//! Shapes the stored menu/product documents into render-ready structures:
//! image filtering, per-day availability, order preservation.

pub mod normalize;

pub use normalize::{
    NormalizedCatalog, NormalizedCategory, NormalizedItem, normalize_catalog, normalize_item,
    valid_images,
};

//! Domain models
//!
//! Persisted document shapes and wire types. All fields serialize in
//! camelCase, matching both the stored documents and the public API.

pub mod account;
pub mod catalog;
pub mod order;
pub mod qrcode;
pub mod vitrine;

pub use account::{Account, SubscriptionStatus};
pub use catalog::{Catalog, CatalogItem, Category, Variant, VariantOption, VariantSelection};
pub use order::{
    CardOrderCreate, CardType, CustomerInfo, Order, OrderCreate, OrderLineInput, OrderLineItem,
    OrderStatus, OrderStatusUpdate, OrderType, QrOrderCreate,
};
pub use qrcode::{QrCode, QrLink, QrType};
pub use vitrine::{Testimonial, Vitrine, VitrineService};

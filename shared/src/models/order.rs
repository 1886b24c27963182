//! Order Model
//!
//! Orders come in two shapes sharing one table: `qr_order` (placed against
//! a QR code's menu/products) and `card_order` (physical card/sticker goods,
//! no QR reference). Creation payloads are a tagged union so the two
//! validation paths stay exhaustive and mutually exclusive.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::catalog::VariantSelection;

/// Order status lifecycle: pending -> confirmed -> delivered, with
/// cancellation possible from any non-terminal state. The allowed
/// transitions live with the lifecycle manager; this is the closed enum the
/// API boundary accepts; any other value is rejected, not coerced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Delivered,
}

impl OrderStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Delivered)
    }

    /// Stored string form (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// Order shape discriminator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    QrOrder,
    CardOrder,
}

/// Physical card product families, each with a fixed per-unit rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    BusinessCards,
    NfcCards,
    Tags,
    Stickers,
}

/// Order line item (stored form; `price` is the server-recomputed
/// effective unit price)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Client line key (e.g. "Classic Burger-0"); opaque to the core
    pub key: String,
    pub item_name: String,
    #[serde(default)]
    pub category_name: String,
    pub quantity: i64,
    /// Effective unit price in currency units
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Customer contact details, required on every order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique, human-presentable order number (server generated)
    pub order_number: String,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
    pub customer_info: CustomerInfo,
    /// Server-computed total in currency units (non-negative)
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    /// Set together for qr_order, both null for card_order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_quantity: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    // Set exactly once when the matching status is first entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
}

/// Order line as submitted by the client. `price` is advisory only; the
/// server recomputes the effective unit price from the catalog and the
/// variant selection to prevent price tampering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub key: String,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub selected_variants: VariantSelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create payload for an order placed against a QR code's catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QrOrderCreate {
    pub qr_code_id: String,
    pub items: Vec<OrderLineInput>,
    #[validate(nested)]
    pub customer_info: CustomerInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Client-computed total; ignored and recomputed server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

/// Create payload for a stand-alone physical card order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardOrderCreate {
    pub card_type: CardType,
    pub card_quantity: i64,
    #[validate(nested)]
    pub customer_info: CustomerInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Tagged order-creation union (`type` discriminates on the wire)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderCreate {
    QrOrder(QrOrderCreate),
    CardOrder(CardOrderCreate),
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

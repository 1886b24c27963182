//! QR Code Model
//!
//! The persisted configuration describing what a scanned code displays.
//! The embedded menu/products/vitrine documents are stored as raw JSON and
//! validated at the read boundary (see the catalog and vitrine models);
//! everything else is strongly typed.

use serde::{Deserialize, Serialize};

/// Content mode of a QR code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QrType {
    /// Immediate redirect to `original_url`, no landing page
    Direct,
    /// Redirect code with a branded interstitial
    Url,
    #[default]
    Menu,
    Vitrine,
    Products,
    /// Menu plus link hub
    Both,
}

impl QrType {
    /// Whether the menu section may render for this type
    pub fn includes_menu(&self) -> bool {
        matches!(self, QrType::Menu | QrType::Both)
    }

    /// Whether this is a redirect-style code (direct/url)
    pub fn is_redirect(&self) -> bool {
        matches!(self, QrType::Direct | QrType::Url)
    }
}

/// Social/platform link shown alongside any content mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrLink {
    /// Platform identifier (e.g. "instagram", "whatsapp", "website")
    pub platform: String,
    pub url: String,
}

/// QR code configuration entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning account id
    pub owner: String,
    /// Business/restaurant display name
    pub name: String,
    #[serde(rename = "type", default)]
    pub qr_type: QrType,
    /// Redirect target, used only when `qr_type` is direct/url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default)]
    pub links: Vec<QrLink>,
    /// Menu document (loosely typed at rest, validated on read)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<serde_json::Value>,
    /// Flat product list document (loosely typed at rest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<serde_json::Value>,
    /// Business showcase document (loosely typed at rest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitrine: Option<serde_json::Value>,
    /// Monotonically increasing scan counter
    #[serde(default)]
    pub scan_count: i64,
    /// Append-only scan timestamps (RFC3339)
    #[serde(default)]
    pub scan_history: Vec<String>,
    // Styling pass-through attributes; never computed by the core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

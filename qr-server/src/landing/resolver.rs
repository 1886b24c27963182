//! Landing Page Resolver
//!
//! Decides which content mode a scanned QR code renders and assembles the
//! payload for it. Decision policy, in priority order:
//!
//! 1. entitlement gate: a lapsed account renders nothing (Forbidden; the
//!    caller redirects to the billing flow)
//! 2. `direct` codes with a redirect target short-circuit before any
//!    catalog/vitrine work
//! 3. otherwise the page composes the non-exclusive feature set: links,
//!    menu (type includes menu, catalog non-empty), vitrine (type is
//!    vitrine, document present), products (first product only; the
//!    single-product display unit is load-bearing downstream and is
//!    preserved deliberately)
//!
//! The display language comes from the client hint when supplied, else
//! from the Language Detector over vitrine/menu text.

use serde::{Deserialize, Serialize};

use crate::catalog::{NormalizedCatalog, NormalizedItem, normalize_catalog, normalize_item};
use crate::landing::language::{Language, detect_language};
use shared::models::{Catalog, CatalogItem, QrCode, QrLink, QrType, SubscriptionStatus, Vitrine};
use shared::{AppError, AppResult};

/// Redirect payload for direct/url codes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectInfo {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Composed landing page content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub name: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<QrLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<NormalizedCatalog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitrine: Option<Vitrine>,
    /// First product only; the landing page is a single-product display
    /// unit and pricing keys downstream assume index 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<NormalizedItem>,
}

/// Resolved landing payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LandingPage {
    Redirect { url: String },
    Page(PageContent),
}

/// Resolve a QR configuration into its landing payload.
///
/// `weekday` is the caller's current lowercase weekday name (used for item
/// availability); `lang_hint` is the optional client-supplied language.
pub fn resolve(
    qr: &QrCode,
    subscription: SubscriptionStatus,
    weekday: &str,
    lang_hint: Option<Language>,
) -> AppResult<LandingPage> {
    if !subscription.is_entitled() {
        return Err(AppError::subscription_required());
    }

    // Direct codes redirect before any catalog work
    if qr.qr_type == QrType::Direct {
        if let Some(url) = qr.original_url.as_deref().filter(|u| !u.is_empty()) {
            return Ok(LandingPage::Redirect {
                url: url.to_string(),
            });
        }
    }

    let menu = (qr.qr_type.includes_menu())
        .then(|| qr.menu.clone())
        .flatten()
        .map(Catalog::from_value)
        .map(|catalog| normalize_catalog(&catalog, weekday))
        .filter(NormalizedCatalog::has_items);

    let vitrine = (qr.qr_type == QrType::Vitrine)
        .then(|| qr.vitrine.clone())
        .flatten()
        .and_then(Vitrine::from_value);

    let product = qr
        .products
        .clone()
        .map(CatalogItem::list_from_value)
        .and_then(|items| items.into_iter().next())
        .map(|item| normalize_item(&item, weekday));

    let language = lang_hint.unwrap_or_else(|| detect_page_language(qr, &vitrine, &menu));

    Ok(LandingPage::Page(PageContent {
        name: qr.name.clone(),
        language,
        background_color: qr.background_color.clone(),
        foreground_color: qr.foreground_color.clone(),
        logo_url: qr.logo_url.clone(),
        links: qr.links.clone(),
        menu,
        vitrine,
        product,
    }))
}

/// Detect the display language in priority order: business name first,
/// then category names, then item names/descriptions in document order
fn detect_page_language(
    qr: &QrCode,
    vitrine: &Option<Vitrine>,
    menu: &Option<NormalizedCatalog>,
) -> Language {
    let mut texts: Vec<&str> = Vec::new();

    match vitrine {
        Some(v) if !v.business_name.is_empty() => texts.push(&v.business_name),
        _ => texts.push(&qr.name),
    }

    if let Some(catalog) = menu {
        for category in &catalog.categories {
            texts.push(&category.name);
        }
        for category in &catalog.categories {
            for item in &category.items {
                texts.push(&item.name);
                texts.push(&item.description);
            }
        }
    }

    detect_language(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_qr(qr_type: QrType) -> QrCode {
        QrCode {
            id: Some("qr_code:test".into()),
            owner: "account:a1".into(),
            name: "Tasty Burger".into(),
            qr_type,
            original_url: None,
            links: vec![],
            menu: None,
            products: None,
            vitrine: None,
            scan_count: 0,
            scan_history: vec![],
            background_color: Some("#ffffff".into()),
            foreground_color: None,
            logo_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn menu_doc() -> serde_json::Value {
        json!({
            "categories": [
                {"name": "Burgers", "items": [{"name": "Classic", "price": 500.0}]}
            ],
            "currency": "DZD",
            "orderable": true
        })
    }

    #[test]
    fn test_direct_redirect_short_circuits() {
        let mut qr = base_qr(QrType::Direct);
        qr.original_url = Some("https://example.com".into());
        // Poisoned catalog: resolving it would yield a menu section; a
        // direct code must never get that far
        qr.menu = Some(menu_doc());

        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Redirect { url } => assert_eq!(url, "https://example.com"),
            _ => panic!("expected redirect"),
        }
    }

    #[test]
    fn test_direct_without_url_falls_through() {
        let qr = base_qr(QrType::Direct);
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        assert!(matches!(page, LandingPage::Page(_)));
    }

    #[test]
    fn test_entitlement_gate() {
        let qr = base_qr(QrType::Menu);
        let err = resolve(&qr, SubscriptionStatus::Expired, "monday", None).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::SubscriptionRequired);
    }

    #[test]
    fn test_menu_section_requires_items() {
        let mut qr = base_qr(QrType::Menu);
        qr.menu = Some(json!({"categories": [{"name": "Empty", "items": []}]}));
        let page = resolve(&qr, SubscriptionStatus::Trial, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => assert!(content.menu.is_none()),
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_menu_section_renders_for_both_type() {
        let mut qr = base_qr(QrType::Both);
        qr.menu = Some(menu_doc());
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => {
                let menu = content.menu.expect("menu section");
                assert_eq!(menu.categories[0].items[0].name, "Classic");
            }
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_menu_ignored_for_products_type() {
        let mut qr = base_qr(QrType::Products);
        qr.menu = Some(menu_doc());
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => assert!(content.menu.is_none()),
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_products_first_only() {
        let mut qr = base_qr(QrType::Products);
        qr.products = Some(json!([
            {"name": "Mug", "price": 900.0},
            {"name": "Shirt", "price": 2200.0}
        ]));
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => {
                let product = content.product.expect("product section");
                assert_eq!(product.name, "Mug");
            }
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_vitrine_section() {
        let mut qr = base_qr(QrType::Vitrine);
        qr.vitrine = Some(json!({"businessName": "Atlas Coiffure"}));
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => {
                assert_eq!(content.vitrine.unwrap().business_name, "Atlas Coiffure");
            }
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_language_detection_from_menu() {
        let mut qr = base_qr(QrType::Menu);
        qr.menu = Some(json!({
            "categories": [{"name": "مشاوي", "items": [{"name": "Kebab", "price": 400.0}]}]
        }));
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => assert_eq!(content.language, Language::Ar),
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_language_hint_wins() {
        let mut qr = base_qr(QrType::Menu);
        qr.menu = Some(json!({
            "categories": [{"name": "مشاوي", "items": [{"name": "Kebab", "price": 400.0}]}]
        }));
        let page =
            resolve(&qr, SubscriptionStatus::Active, "monday", Some(Language::En)).unwrap();
        match page {
            LandingPage::Page(content) => assert_eq!(content.language, Language::En),
            _ => panic!("expected page"),
        }
    }

    #[test]
    fn test_links_alongside_vitrine() {
        let mut qr = base_qr(QrType::Vitrine);
        qr.vitrine = Some(json!({"businessName": "Atlas"}));
        qr.links = vec![QrLink {
            platform: "instagram".into(),
            url: "https://instagram.com/atlas".into(),
        }];
        let page = resolve(&qr, SubscriptionStatus::Active, "monday", None).unwrap();
        match page {
            LandingPage::Page(content) => {
                assert_eq!(content.links.len(), 1);
                assert!(content.vitrine.is_some());
            }
            _ => panic!("expected page"),
        }
    }
}

//! Landing resolution against persisted documents: the stored, loosely
//! typed configuration round-trips through the read boundary into the
//! resolved payload.
//! Run: cargo test -p qr-server --test landing_resolution

use qr_server::db::DbService;
use qr_server::db::repository::{AccountRepository, QrCodeRepository};
use qr_server::landing::{Language, LandingPage, resolve};
use serde_json::json;
use shared::ErrorCode;
use shared::models::{Account, QrCode};

struct Ctx {
    _tmp: tempfile::TempDir,
    accounts: AccountRepository,
    qr_codes: QrCodeRepository,
}

async fn setup() -> Ctx {
    let tmp = tempfile::tempdir().unwrap();
    let db = DbService::new(&tmp.path().join("qr.db").to_string_lossy())
        .await
        .expect("open database");
    Ctx {
        accounts: AccountRepository::new(db.db.clone()),
        qr_codes: QrCodeRepository::new(db.db.clone()),
        _tmp: tmp,
    }
}

async fn seed_account(ctx: &Ctx, status: &str) -> String {
    let account: Account = serde_json::from_value(json!({
        "name": "Merchant",
        "subscriptionStatus": status
    }))
    .unwrap();
    ctx.accounts.create(account).await.unwrap().id.unwrap()
}

async fn seed_qr(ctx: &Ctx, owner: &str, extra: serde_json::Value) -> QrCode {
    let mut doc = json!({
        "owner": owner,
        "name": "Tasty Burger",
        "type": "menu"
    });
    doc.as_object_mut()
        .unwrap()
        .extend(extra.as_object().unwrap().clone());
    let qr: QrCode = serde_json::from_value(doc).unwrap();
    ctx.qr_codes.create(qr).await.unwrap()
}

async fn resolve_stored(
    ctx: &Ctx,
    qr: &QrCode,
    weekday: &str,
    lang: Option<Language>,
) -> shared::AppResult<LandingPage> {
    // Mirror the handler: re-read both documents from storage
    let stored = ctx
        .qr_codes
        .find_by_id(qr.id.as_ref().unwrap())
        .await
        .unwrap()
        .unwrap();
    let account = ctx
        .accounts
        .find_by_id(&stored.owner)
        .await
        .unwrap()
        .unwrap();
    resolve(&stored, account.subscription_status, weekday, lang)
}

#[tokio::test]
async fn stored_menu_round_trips_through_normalization() {
    let ctx = setup().await;
    let owner = seed_account(&ctx, "active").await;
    let qr = seed_qr(
        &ctx,
        &owner,
        json!({
            "menu": {
                "categories": [{
                    "name": "Burgers",
                    "items": [{
                        "name": "Classic",
                        "price": 500.0,
                        "images": ["blob:http://localhost/tmp", "https://cdn.example.com/c.jpg"],
                        "availability": {"monday": false}
                    }]
                }],
                "currency": "DZD",
                "orderable": true
            },
            "links": [{"platform": "instagram", "url": "https://instagram.com/tasty"}]
        }),
    )
    .await;

    let page = resolve_stored(&ctx, &qr, "monday", None).await.unwrap();
    let content = match page {
        LandingPage::Page(content) => content,
        _ => panic!("expected page"),
    };

    let menu = content.menu.expect("menu section");
    let item = &menu.categories[0].items[0];
    // Transient blob reference filtered at the read boundary
    assert_eq!(item.images, vec!["https://cdn.example.com/c.jpg".to_string()]);
    // Availability honored for the caller's weekday
    assert!(!item.available_today);
    assert!(menu.orderable);
    assert_eq!(content.links.len(), 1);
    assert_eq!(content.language, Language::En);
}

#[tokio::test]
async fn expired_subscription_is_forbidden() {
    let ctx = setup().await;
    let owner = seed_account(&ctx, "expired").await;
    let qr = seed_qr(&ctx, &owner, json!({})).await;

    let err = resolve_stored(&ctx, &qr, "monday", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SubscriptionRequired);
}

#[tokio::test]
async fn direct_code_redirects_without_touching_catalog() {
    let ctx = setup().await;
    let owner = seed_account(&ctx, "trial").await;
    let qr = seed_qr(
        &ctx,
        &owner,
        json!({
            "type": "direct",
            "originalUrl": "https://example.com/menu.pdf",
            // Malformed on purpose: resolution must not read it
            "menu": {"categories": "corrupted"}
        }),
    )
    .await;

    let page = resolve_stored(&ctx, &qr, "monday", None).await.unwrap();
    match page {
        LandingPage::Redirect { url } => assert_eq!(url, "https://example.com/menu.pdf"),
        _ => panic!("expected redirect"),
    }
}

#[tokio::test]
async fn products_mode_shows_first_product_only() {
    let ctx = setup().await;
    let owner = seed_account(&ctx, "active").await;
    let qr = seed_qr(
        &ctx,
        &owner,
        json!({
            "type": "products",
            "products": [
                {"name": "Mug", "price": 900.0},
                {"name": "Shirt", "price": 2200.0},
                {"name": "Cap", "price": 1100.0}
            ]
        }),
    )
    .await;

    let page = resolve_stored(&ctx, &qr, "monday", None).await.unwrap();
    match page {
        LandingPage::Page(content) => {
            assert_eq!(content.product.expect("product").name, "Mug");
            assert!(content.menu.is_none());
        }
        _ => panic!("expected page"),
    }
}

#[tokio::test]
async fn arabic_menu_detected_unless_hinted() {
    let ctx = setup().await;
    let owner = seed_account(&ctx, "active").await;
    let qr = seed_qr(
        &ctx,
        &owner,
        json!({
            "menu": {
                "categories": [{
                    "name": "مشاوي",
                    "items": [{"name": "كباب", "price": 400.0}]
                }]
            }
        }),
    )
    .await;

    let page = resolve_stored(&ctx, &qr, "monday", None).await.unwrap();
    match page {
        LandingPage::Page(content) => assert_eq!(content.language, Language::Ar),
        _ => panic!("expected page"),
    }

    let page = resolve_stored(&ctx, &qr, "monday", Some(Language::En))
        .await
        .unwrap();
    match page {
        LandingPage::Page(content) => assert_eq!(content.language, Language::En),
        _ => panic!("expected page"),
    }
}

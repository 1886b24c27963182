//! QR Code API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{AccountRepository, QrCodeRepository, RepoError};
use crate::landing::{Language, LandingPage, RedirectInfo, resolve};
use shared::models::QrCode;
use shared::{AppError, AppResult, ErrorCode};

/// Query params for the public landing route
#[derive(Debug, Deserialize)]
pub struct PublicQuery {
    /// Optional client language hint ("en" | "ar"); wins over detection
    pub lang: Option<String>,
}

/// Current lowercase weekday name, used for item availability
fn current_weekday() -> &'static str {
    match chrono::Utc::now().weekday() {
        chrono::Weekday::Mon => "monday",
        chrono::Weekday::Tue => "tuesday",
        chrono::Weekday::Wed => "wednesday",
        chrono::Weekday::Thu => "thursday",
        chrono::Weekday::Fri => "friday",
        chrono::Weekday::Sat => "saturday",
        chrono::Weekday::Sun => "sunday",
    }
}

async fn fetch_qr(state: &ServerState, id: &str) -> AppResult<QrCode> {
    let repo = QrCodeRepository::new(state.db.clone());
    repo.find_by_id(id).await.map_err(AppError::from)?.ok_or_else(|| {
        AppError::with_message(ErrorCode::QrCodeNotFound, format!("QR code {} not found", id))
    })
}

/// GET /qrcodes/public/{id} - resolve the landing payload for a scan
pub async fn get_public(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<PublicQuery>,
) -> AppResult<Json<LandingPage>> {
    let qr = fetch_qr(&state, &id).await?;

    let accounts = AccountRepository::new(state.db.clone());
    let account = accounts
        .find_by_id(&qr.owner)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::AccountNotFound,
                format!("Owner account for QR code {} not found", id),
            )
        })?;

    let lang_hint = query.lang.as_deref().and_then(Language::from_hint);
    let page = resolve(
        &qr,
        account.subscription_status,
        current_weekday(),
        lang_hint,
    )?;
    Ok(Json(page))
}

/// Scan counter response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub scan_count: i64,
}

/// POST /qrcodes/{id}/scan - increment the scan counter
///
/// Best-effort telemetry: invoked by the landing page alongside resolution,
/// so a failure here must never block rendering. Missing codes are logged
/// and reported as 404.
pub async fn scan(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ScanResponse>> {
    let repo = QrCodeRepository::new(state.db.clone());
    match repo.record_scan(&id).await {
        Ok(scan_count) => Ok(Json(ScanResponse { scan_count })),
        Err(RepoError::NotFound(msg)) => {
            tracing::warn!(qr_code = %id, "Scan recorded against unknown QR code");
            Err(AppError::with_message(ErrorCode::QrCodeNotFound, msg))
        }
        Err(e) => Err(AppError::from(e)),
    }
}

/// GET /qrcodes/redirect/{id} - redirect target for direct/url codes
pub async fn redirect_info(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RedirectInfo>> {
    let qr = fetch_qr(&state, &id).await?;

    let url = qr
        .original_url
        .as_deref()
        .filter(|u| !u.is_empty() && qr.qr_type.is_redirect())
        .ok_or_else(|| AppError::new(ErrorCode::RedirectUnavailable))?;

    Ok(Json(RedirectInfo {
        url: url.to_string(),
        name: qr.name.clone(),
        background_color: qr.background_color.clone(),
        foreground_color: qr.foreground_color.clone(),
        logo_url: qr.logo_url.clone(),
    }))
}

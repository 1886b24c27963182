//! QR Code API Module
//!
//! Public scan-time routes: landing resolution, scan counting and
//! redirect lookups. No authentication; these are what the printed code
//! points at.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// QR code router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/qrcodes/public/{id}", get(handler::get_public))
        .route("/qrcodes/{id}/scan", post(handler::scan))
        .route("/qrcodes/redirect/{id}", get(handler::redirect_info))
}

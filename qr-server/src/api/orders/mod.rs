//! Order API Module
//!
//! Order submission is public (customers order from the landing page);
//! listing, status transitions and deletion are owner-scoped.

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route(
            "/{id}",
            get(handler::get_by_id).delete(handler::delete_order),
        )
        .route("/{id}/status", patch(handler::update_status))
}

//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::extract::CurrentAccount;
use crate::core::ServerState;
use crate::orders::OrdersManager;
use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate};
use shared::{AppResult, PaginatedResponse};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub status: Option<OrderStatus>,
    pub search_term: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// POST /api/orders - submit an order (public)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let manager = OrdersManager::new(state.db.clone());
    let order = manager.create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders - owner-scoped paginated listing
pub async fn list(
    State(state): State<ServerState>,
    CurrentAccount(account): CurrentAccount,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Order>>> {
    let manager = OrdersManager::new(state.db.clone());
    let page = manager
        .list(
            &account,
            query.page,
            query.limit,
            query.status,
            query.search_term,
        )
        .await?;
    Ok(Json(page))
}

/// GET /api/orders/{id} - owner-scoped fetch
pub async fn get_by_id(
    State(state): State<ServerState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let manager = OrdersManager::new(state.db.clone());
    let order = manager.get(&id, &account).await?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/status - drive the lifecycle state machine
pub async fn update_status(
    State(state): State<ServerState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let manager = OrdersManager::new(state.db.clone());
    let order = manager.transition(&id, &account, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/{id} - owner-scoped delete
pub async fn delete_order(
    State(state): State<ServerState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let manager = OrdersManager::new(state.db.clone());
    manager.delete(&id, &account).await?;
    Ok(StatusCode::NO_CONTENT)
}

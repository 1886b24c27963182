//! Orders Manager
//!
//! Validates order creation payloads, recomputes totals server-side, and
//! drives status transitions through the lifecycle table. The two creation
//! paths (qr_order / card_order) are handled exhaustively via the tagged
//! payload union.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use crate::catalog::valid_images;
use crate::db::repository::order::OrderListFilter;
use crate::db::repository::{OrderRepository, QrCodeRepository};
use crate::orders::lifecycle::allowed_predecessors;
use crate::pricing::{card_total, effective_price, order_total};
use shared::models::{
    CardOrderCreate, Catalog, CatalogItem, CustomerInfo, Order, OrderCreate, OrderLineInput,
    OrderLineItem, OrderStatus, OrderStatusUpdate, OrderType, QrOrderCreate,
};
use shared::util::{now_rfc3339, snowflake_id};
use shared::{AppError, AppResult, ErrorCode, PaginatedResponse};

pub struct OrdersManager {
    orders: OrderRepository,
    qr_codes: QrCodeRepository,
}

impl OrdersManager {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            qr_codes: QrCodeRepository::new(db),
        }
    }

    // ==================== Creation ====================

    /// Validate and persist a new order (status `pending`)
    pub async fn create(&self, payload: OrderCreate) -> AppResult<Order> {
        match payload {
            OrderCreate::QrOrder(p) => self.create_qr_order(p).await,
            OrderCreate::CardOrder(p) => self.create_card_order(p).await,
        }
    }

    async fn create_qr_order(&self, payload: QrOrderCreate) -> AppResult<Order> {
        payload.validate().map_err(AppError::from)?;
        if payload.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        for line in &payload.items {
            if line.quantity < 1 {
                return Err(AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    "quantity must be at least 1",
                )
                .with_detail("line", line.key.clone()));
            }
        }

        let qr = self
            .qr_codes
            .find_by_id(&payload.qr_code_id)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::QrCodeNotFound,
                    format!("QR code {} not found", payload.qr_code_id),
                )
            })?;

        let menu = qr
            .menu
            .clone()
            .map(Catalog::from_value)
            .unwrap_or_default();
        let products = qr
            .products
            .clone()
            .map(CatalogItem::list_from_value)
            .unwrap_or_default();

        // Re-price every line from the stored catalog; the submitted
        // price/total is advisory only
        let mut line_items = Vec::with_capacity(payload.items.len());
        let mut totals = Vec::with_capacity(payload.items.len());
        for line in &payload.items {
            let item = find_catalog_item(&menu, &products, line).ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::OrderItemUnknown,
                    format!("item '{}' is not in this catalog", line.item_name),
                )
                .with_detail("line", line.key.clone())
            })?;

            let unit_price = effective_price(item, &line.selected_variants);
            totals.push((unit_price, line.quantity));
            line_items.push(OrderLineItem {
                key: line.key.clone(),
                item_name: line.item_name.clone(),
                category_name: line.category_name.clone().unwrap_or_default(),
                quantity: line.quantity,
                price: unit_price,
                image_url: line
                    .image_url
                    .clone()
                    .or_else(|| valid_images(item).into_iter().next()),
            });
        }
        let total_amount = order_total(&totals);

        if let Some(claimed) = payload.total_amount {
            if (claimed - total_amount).abs() > f64::EPSILON {
                tracing::warn!(
                    claimed,
                    recomputed = total_amount,
                    qr_code = %payload.qr_code_id,
                    "Client-submitted total ignored"
                );
            }
        }

        let order = new_order(
            OrderType::QrOrder,
            line_items,
            payload.customer_info,
            total_amount,
            payload.notes,
        );
        let order = Order {
            qr_code_id: qr.id.clone(),
            qr_code_owner_id: Some(qr.owner.clone()),
            ..order
        };

        let created = self.orders.create(order).await?;
        tracing::info!(
            order_number = %created.order_number,
            qr_code = %payload.qr_code_id,
            total = created.total_amount,
            "QR order created"
        );
        Ok(created)
    }

    async fn create_card_order(&self, payload: CardOrderCreate) -> AppResult<Order> {
        payload.validate().map_err(AppError::from)?;
        if payload.card_quantity < 1 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "cardQuantity must be at least 1",
            )
            .with_detail("field", "cardQuantity"));
        }

        let total_amount = card_total(payload.card_type, payload.card_quantity);

        let order = new_order(
            OrderType::CardOrder,
            Vec::new(),
            payload.customer_info,
            total_amount,
            payload.notes,
        );
        let order = Order {
            card_type: Some(payload.card_type),
            card_quantity: Some(payload.card_quantity),
            ..order
        };

        let created = self.orders.create(order).await?;
        tracing::info!(
            order_number = %created.order_number,
            card_type = ?payload.card_type,
            quantity = payload.card_quantity,
            "Card order created"
        );
        Ok(created)
    }

    // ==================== Queries ====================

    /// Owner-scoped fetch
    pub async fn get(&self, id: &str, account: &str) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))?;
        ensure_owned(&order, account)?;
        Ok(order)
    }

    /// Owner-scoped paginated listing
    pub async fn list(
        &self,
        account: &str,
        page: i64,
        limit: i64,
        status: Option<OrderStatus>,
        search_term: Option<String>,
    ) -> AppResult<PaginatedResponse<Order>> {
        let limit = limit.clamp(1, 100);
        let page = page.max(1);
        let filter = OrderListFilter {
            owner: account.to_string(),
            status,
            search_term: search_term.filter(|s| !s.is_empty()),
            limit,
            start: (page - 1) * limit,
        };
        let (orders, total) = self.orders.find_page(&filter).await?;
        Ok(PaginatedResponse::new(orders, total, limit))
    }

    // ==================== Transitions ====================

    /// Move an order into the requested status.
    ///
    /// The predecessor check runs inside the storage update, so concurrent
    /// transitions serialize there; this method only classifies the
    /// failure when the conditional update matched nothing.
    pub async fn transition(
        &self,
        id: &str,
        account: &str,
        update: OrderStatusUpdate,
    ) -> AppResult<Order> {
        let existing = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))?;
        ensure_owned(&existing, account)?;

        let next = update.status;
        let allowed = allowed_predecessors(next);
        if allowed.is_empty() {
            return Err(
                AppError::illegal_transition("orders cannot re-enter the pending state")
                    .with_detail("to", next.as_str()),
            );
        }

        match self
            .orders
            .transition(id, next, allowed, update.admin_notes)
            .await?
        {
            Some(order) => {
                tracing::info!(
                    order_number = %order.order_number,
                    from = existing.status.as_str(),
                    to = next.as_str(),
                    "Order status updated"
                );
                Ok(order)
            }
            None => {
                // The conditional update matched nothing: the order was
                // deleted meanwhile, or its current status is not a legal
                // predecessor (possibly because a concurrent transition won)
                let current = self
                    .orders
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| order_not_found(id))?;
                Err(already_settled(current.status, next))
            }
        }
    }

    /// Owner-scoped delete. Deleting a qr_order never touches its parent
    /// QR code.
    pub async fn delete(&self, id: &str, account: &str) -> AppResult<()> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))?;
        ensure_owned(&order, account)?;
        self.orders.delete(id).await?;
        tracing::info!(order_number = %order.order_number, "Order deleted");
        Ok(())
    }
}

// ==================== Helpers ====================

fn new_order(
    order_type: OrderType,
    items: Vec<OrderLineItem>,
    customer_info: CustomerInfo,
    total_amount: f64,
    notes: Option<String>,
) -> Order {
    let now = now_rfc3339();
    Order {
        id: None,
        order_number: format!("ORD-{}", snowflake_id()),
        order_type,
        items,
        customer_info,
        total_amount,
        status: OrderStatus::Pending,
        notes,
        admin_notes: None,
        qr_code_id: None,
        qr_code_owner_id: None,
        card_type: None,
        card_quantity: None,
        created_at: now.clone(),
        updated_at: now,
        confirmed_at: None,
        cancelled_at: None,
        delivered_at: None,
    }
}

fn order_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
}

/// qr_orders belong to the QR code's owner; stand-alone card orders are
/// administered by the authenticated surface (who may call at all is the
/// gateway's decision)
fn ensure_owned(order: &Order, account: &str) -> AppResult<()> {
    let owned = match order.order_type {
        OrderType::QrOrder => order.qr_code_owner_id.as_deref() == Some(account),
        OrderType::CardOrder => true,
    };
    if owned {
        Ok(())
    } else {
        Err(AppError::forbidden("Order belongs to another account"))
    }
}

/// Classify a failed conditional transition against the current status
fn already_settled(current: OrderStatus, requested: OrderStatus) -> AppError {
    let err = match current {
        OrderStatus::Delivered => AppError::with_message(
            ErrorCode::OrderAlreadyDelivered,
            "Order is already terminal (delivered)",
        ),
        OrderStatus::Cancelled => AppError::with_message(
            ErrorCode::OrderAlreadyCancelled,
            "Order is already terminal (cancelled)",
        ),
        _ => AppError::illegal_transition(format!(
            "cannot move a {} order to {}",
            current.as_str(),
            requested.as_str()
        )),
    };
    err.with_detail("from", current.as_str())
        .with_detail("to", requested.as_str())
}

/// Locate the catalog item a line refers to: menu categories first
/// (constrained by category name when the line carries one), then the flat
/// products list
fn find_catalog_item<'a>(
    menu: &'a Catalog,
    products: &'a [CatalogItem],
    line: &OrderLineInput,
) -> Option<&'a CatalogItem> {
    let from_menu = menu
        .categories
        .iter()
        .filter(|category| match &line.category_name {
            Some(name) if !name.is_empty() => &category.name == name,
            _ => true,
        })
        .flat_map(|category| category.items.iter())
        .find(|item| item.name == line.item_name);

    from_menu.or_else(|| products.iter().find(|item| item.name == line.item_name))
}

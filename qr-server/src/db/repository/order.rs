//! Order Repository
//!
//! Persistence for both order shapes (qr_order / card_order). Status
//! transitions are conditional updates; the allowed predecessor states are
//! checked inside the UPDATE statement itself, so two racing transitions
//! serialize at the storage layer and a terminal-state check can never be
//! bypassed.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use shared::models::{Order, OrderStatus};
use shared::util::now_rfc3339;

const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

/// Filters for the owner-scoped listing
#[derive(Debug, Clone, Default)]
pub struct OrderListFilter {
    pub owner: String,
    pub status: Option<OrderStatus>,
    pub search_term: Option<String>,
    pub limit: i64,
    pub start: i64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: i64,
}

#[derive(Debug, Deserialize)]
struct IdRow {
    #[allow(dead_code)]
    id: String,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let pure_id = strip_table_prefix(ORDER_TABLE, id);
        let mut result = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM type::thing($table, $id)")
            .bind(("table", ORDER_TABLE))
            .bind(("id", pure_id.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Persist a fully validated order
    pub async fn create(&self, mut order: Order) -> RepoResult<Order> {
        let key = Uuid::new_v4().simple().to_string();
        order.id = None;

        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", ORDER_TABLE))
            .bind(("id", key.clone()))
            .bind(("data", order))
            .await?
            .check()?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create order".into()))
    }

    /// Owner-scoped paginated listing. qr_orders match on their QR owner;
    /// stand-alone card orders carry no owner and are visible to the
    /// authenticated administration surface (authorization itself is the
    /// gateway's concern).
    pub async fn find_page(&self, filter: &OrderListFilter) -> RepoResult<(Vec<Order>, i64)> {
        let mut conditions =
            vec!["(qrCodeOwnerId = $owner OR orderType = 'card_order')".to_string()];
        if filter.status.is_some() {
            conditions.push("status = $status".to_string());
        }
        if filter.search_term.is_some() {
            conditions.push(
                "(orderNumber CONTAINS $q OR customerInfo.name CONTAINS $q \
                 OR customerInfo.phone CONTAINS $q)"
                    .to_string(),
            );
        }
        let where_clause = conditions.join(" AND ");

        let list_sql = format!(
            "SELECT *, <string>id AS id FROM order WHERE {} \
             ORDER BY createdAt DESC LIMIT $limit START $start",
            where_clause
        );
        let count_sql = format!(
            "SELECT count() AS total FROM order WHERE {} GROUP ALL",
            where_clause
        );

        let mut query = self
            .base
            .db()
            .query(&list_sql)
            .query(&count_sql)
            .bind(("owner", filter.owner.clone()))
            .bind(("limit", filter.limit))
            .bind(("start", filter.start));
        if let Some(status) = filter.status {
            query = query.bind(("status", status.as_str()));
        }
        if let Some(q) = &filter.search_term {
            query = query.bind(("q", q.clone()));
        }

        let mut result = query.await?;
        let orders: Vec<Order> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.total).unwrap_or(0);
        Ok((orders, total))
    }

    /// Conditionally move an order into `next`, only when its current
    /// status is one of `allowed_from`. The timestamp field for `next` is
    /// set with `?? $now`, so re-entering an already-visited state never
    /// overwrites the original timestamp. Returns the updated order, or
    /// `None` when the condition did not match (caller disambiguates
    /// not-found / illegal transition).
    pub async fn transition(
        &self,
        id: &str,
        next: OrderStatus,
        allowed_from: &[OrderStatus],
        admin_notes: Option<String>,
    ) -> RepoResult<Option<Order>> {
        let pure_id = strip_table_prefix(ORDER_TABLE, id);
        let timestamp_field = match next {
            OrderStatus::Confirmed => Some("confirmedAt"),
            OrderStatus::Cancelled => Some("cancelledAt"),
            OrderStatus::Delivered => Some("deliveredAt"),
            OrderStatus::Pending => None,
        };

        let mut set_parts = vec![
            "status = $status".to_string(),
            "updatedAt = $now".to_string(),
        ];
        if let Some(field) = timestamp_field {
            set_parts.push(format!("{field} = {field} ?? $now"));
        }
        if admin_notes.is_some() {
            set_parts.push("adminNotes = $admin_notes".to_string());
        }

        let sql = format!(
            "UPDATE type::thing($table, $id) SET {} \
             WHERE status IN $allowed RETURN <string>id AS id",
            set_parts.join(", ")
        );

        let allowed: Vec<String> = allowed_from.iter().map(|s| s.as_str().to_string()).collect();
        let mut query = self
            .base
            .db()
            .query(&sql)
            .bind(("table", ORDER_TABLE))
            .bind(("id", pure_id.to_string()))
            .bind(("status", next.as_str()))
            .bind(("now", now_rfc3339()))
            .bind(("allowed", allowed));
        if let Some(notes) = admin_notes {
            query = query.bind(("admin_notes", notes));
        }

        let mut result = query.await?;
        let updated: Vec<IdRow> = result.take(0)?;
        if updated.is_empty() {
            return Ok(None);
        }
        self.find_by_id(pure_id).await
    }

    /// Delete an order
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(ORDER_TABLE, id);
        if self.find_by_id(pure_id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }
        self.base
            .db()
            .query("DELETE type::thing($table, $id)")
            .bind(("table", ORDER_TABLE))
            .bind(("id", pure_id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}

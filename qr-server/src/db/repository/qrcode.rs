//! QR Code Repository

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use shared::models::QrCode;
use shared::util::now_rfc3339;

const QR_CODE_TABLE: &str = "qr_code";

#[derive(Clone)]
pub struct QrCodeRepository {
    base: BaseRepository,
}

/// Projection returned by the scan-count update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanCountRow {
    scan_count: i64,
}

impl QrCodeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find QR code by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<QrCode>> {
        let pure_id = strip_table_prefix(QR_CODE_TABLE, id);
        let mut result = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM type::thing($table, $id)")
            .bind(("table", QR_CODE_TABLE))
            .bind(("id", pure_id.to_string()))
            .await?;
        let codes: Vec<QrCode> = result.take(0)?;
        Ok(codes.into_iter().next())
    }

    /// Find all QR codes belonging to an account
    pub async fn find_by_owner(&self, owner: &str) -> RepoResult<Vec<QrCode>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM qr_code WHERE owner = $owner ORDER BY createdAt DESC")
            .bind(("owner", owner.to_string()))
            .await?;
        let codes: Vec<QrCode> = result.take(0)?;
        Ok(codes)
    }

    /// Create a QR code configuration
    pub async fn create(&self, mut qr: QrCode) -> RepoResult<QrCode> {
        let key = Uuid::new_v4().simple().to_string();
        let now = now_rfc3339();
        qr.id = None;
        qr.scan_count = 0;
        qr.scan_history = Vec::new();
        qr.created_at = Some(now.clone());
        qr.updated_at = Some(now);

        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", QR_CODE_TABLE))
            .bind(("id", key.clone()))
            .bind(("data", qr))
            .await?
            .check()?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create QR code".into()))
    }

    /// Atomically increment the scan counter and append a scan timestamp.
    ///
    /// The increment and append run as a single storage-level statement, so
    /// concurrent scans never lose updates (no read-then-write from a stale
    /// snapshot). Returns the updated count.
    pub async fn record_scan(&self, id: &str) -> RepoResult<i64> {
        let pure_id = strip_table_prefix(QR_CODE_TABLE, id);
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE type::thing($table, $id) \
                 SET scanCount += 1, scanHistory += $ts, updatedAt = $ts \
                 RETURN scanCount",
            )
            .bind(("table", QR_CODE_TABLE))
            .bind(("id", pure_id.to_string()))
            .bind(("ts", now_rfc3339()))
            .await?;
        let rows: Vec<ScanCountRow> = result.take(0)?;
        rows.into_iter()
            .next()
            .map(|r| r.scan_count)
            .ok_or_else(|| RepoError::NotFound(format!("QR code {} not found", id)))
    }

    /// Delete a QR code, cascading to its qr_orders. Stand-alone card
    /// orders are untouched. Only the owning account may delete.
    pub async fn delete(&self, id: &str, owner: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(QR_CODE_TABLE, id);
        let qr = self
            .find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("QR code {} not found", id)))?;
        if qr.owner != owner {
            return Err(RepoError::Validation(
                "QR code belongs to another account".into(),
            ));
        }

        let qr_record_id = format!("{}:{}", QR_CODE_TABLE, pure_id);
        self.base
            .db()
            .query("DELETE order WHERE qrCodeId = $qr")
            .bind(("qr", qr_record_id))
            .await?
            .check()?;

        self.base
            .db()
            .query("DELETE type::thing($table, $id)")
            .bind(("table", QR_CODE_TABLE))
            .bind(("id", pure_id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}

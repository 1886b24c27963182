//! Database Module
//!
//! Embedded SurrealDB storage. Documents (QR configurations, orders,
//! accounts) are stored loosely typed and validated at the read boundary.

pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Database service, owns the embedded database handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at the given path and apply schema
    /// definitions
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::setup(db).await
    }

    async fn setup(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns("qr").use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!("Database ready (embedded SurrealDB)");
        Ok(Self { db })
    }

    /// Idempotent schema definitions. Tables stay schemaless because the
    /// embedded catalog/vitrine documents are dynamically shaped; indexes
    /// cover the hot lookup paths.
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        const DEFINITIONS: &[&str] = &[
            "DEFINE TABLE IF NOT EXISTS account",
            "DEFINE TABLE IF NOT EXISTS qr_code",
            "DEFINE TABLE IF NOT EXISTS order",
            "DEFINE INDEX IF NOT EXISTS qr_code_owner ON qr_code FIELDS owner",
            "DEFINE INDEX IF NOT EXISTS order_owner ON order FIELDS qrCodeOwnerId",
            "DEFINE INDEX IF NOT EXISTS order_qr_code ON order FIELDS qrCodeId",
            "DEFINE INDEX IF NOT EXISTS order_number ON order FIELDS orderNumber UNIQUE",
        ];

        for definition in DEFINITIONS {
            db.query(*definition)
                .await
                .map_err(|e| AppError::database(format!("Schema definition failed: {e}")))?;
        }
        Ok(())
    }
}

//! QR Server - landing resolution and ordering core
//!
//! # Architecture overview
//!
//! - **Database** (`db`): embedded SurrealDB storage with repositories
//! - **Catalog** (`catalog`): read-boundary normalization of stored
//!   menu/product documents
//! - **Landing** (`landing`): content-mode resolution and language detection
//! - **Pricing** (`pricing`): variant surcharges and card price table
//! - **Orders** (`orders`): order lifecycle state machine and creation
//!   validation
//! - **HTTP API** (`api`): public scan/landing routes and owner-scoped
//!   order administration
//!
//! # Module structure
//!
//! ```text
//! qr-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer
//! ├── catalog/       # Catalog normalizer
//! ├── landing/       # Landing page resolver
//! ├── pricing/       # Variant pricing engine
//! ├── orders/        # Order lifecycle manager
//! └── utils/         # Logging and helpers
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod landing;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use orders::OrdersManager;
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load environment and initialize logging. Called once at startup.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

/// Startup banner (log output only)
pub fn print_banner() {
    tracing::info!("========================================");
    tracing::info!("  QR Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("========================================");
}

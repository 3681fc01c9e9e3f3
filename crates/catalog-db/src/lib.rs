//! # catalog-db: Database Layer for the Webshop Catalog
//!
//! SQLite-backed storage for the product catalog: connection pool,
//! embedded migrations, and the repositories the API layer calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Data Flow                             │
//! │                                                                     │
//! │  API handler (get_product, list_products, ...)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-db (THIS CRATE)                    │   │
//! │  │                                                             │   │
//! │  │   ┌────────────┐   ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │  Database  │   │  Repositories  │   │  Migrations  │   │   │
//! │  │   │ (pool.rs)  │◄──│ product, brand │   │  (embedded)  │   │   │
//! │  │   │ SqlitePool │   │ category       │   │  001, 002    │   │   │
//! │  │   └────────────┘   └────────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (WAL mode, FTS5 name index)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("catalog.db")).await?;
//! let page = db.products().list(0, 20).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::brand::BrandRepository;
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;

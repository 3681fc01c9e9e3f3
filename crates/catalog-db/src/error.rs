//! # Database Error Types
//!
//! Error taxonomy for catalog store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  ValidationError (catalog-core) ──┐                                 │
//! │                                   ▼                                 │
//! │  sqlx::Error ──────────────► DbError (this module)                  │
//! │                                   │                                 │
//! │                                   ▼                                 │
//! │  API layer maps variants to HTTP responses                          │
//! │                                                                     │
//! │  A failure inside a write transaction aborts the whole operation:   │
//! │  the transaction is dropped without commit and rolls back.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use catalog_core::ValidationError;

/// Catalog store operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found.
    ///
    /// Raised by `get` on an unknown product id and by `update` before it
    /// performs any write.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input failed decoding or required-field validation.
    ///
    /// Carries the user-facing message from catalog-core unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unique constraint violation.
    #[error("Duplicate {field}")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    ///
    /// Typically a publication link to a publication that does not exist,
    /// or a recommendation edge to an unknown product.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Could not connect to or open the database.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// All pooled connections are in use.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Any other driver failure.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Converts driver errors, categorizing SQLite constraint failures.
///
/// This conversion is the first place a storage failure is seen, so it is
/// also where the failure gets logged; callers propagate the result
/// unchanged.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound   → DbError::NotFound
/// sqlx::Error::Database      → constraint analysis of the message
/// sqlx::Error::PoolTimedOut  → DbError::PoolExhausted
/// other                      → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database operation failed");

        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                //   "UNIQUE constraint failed: <table>.<column>"
                //   "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        tracing::error!(error = %err, "migration failed");
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for catalog store operations.
pub type DbResult<T> = Result<T, DbError>;

//! # Brand Repository
//!
//! Brand resolve-or-create, the dependency product writes lean on.
//!
//! Brand CRUD itself belongs to the admin API; the catalog store only
//! needs to turn a brand name into a usable id while a product write is
//! in flight.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;

/// Repository for brand lookups.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    pool: SqlitePool,
}

impl BrandRepository {
    /// Creates a new BrandRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BrandRepository { pool }
    }

    /// Returns the id of the brand with the given name, creating the
    /// brand when no row matches.
    pub async fn resolve_or_create(&self, name: &str) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        resolve_or_create(&mut conn, name).await
    }
}

/// Connection-scoped resolve-or-create.
///
/// Takes the caller's connection so that product create/update can run it
/// on their own open transaction: if the product write fails, the brand
/// row rolls back with it.
pub(crate) async fn resolve_or_create(conn: &mut SqliteConnection, name: &str) -> DbResult<i64> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT brand_id FROM brands WHERE name = ?1")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(brand_id) = existing {
        return Ok(brand_id);
    }

    let brand_id: i64 =
        sqlx::query_scalar("INSERT INTO brands (name) VALUES (?1) RETURNING brand_id")
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;

    debug!(brand_id, name = %name, "brand created");
    Ok(brand_id)
}

// =============================================================================
// Unit Tests
// =============================================================================

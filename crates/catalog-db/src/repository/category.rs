//! # Category Repository
//!
//! Category resolve-or-create. The category id also scopes the feature
//! rows product writes may create, so resolving it happens before any
//! feature work.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;

/// Repository for category lookups.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Returns the id of the category with the given name, creating the
    /// category when no row matches.
    pub async fn resolve_or_create(&self, name: &str) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        resolve_or_create(&mut conn, name).await
    }
}

/// Connection-scoped resolve-or-create; see the brand counterpart for the
/// transaction contract.
pub(crate) async fn resolve_or_create(conn: &mut SqliteConnection, name: &str) -> DbResult<i64> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT category_id FROM categories WHERE name = ?1")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

    if let Some(category_id) = existing {
        return Ok(category_id);
    }

    let category_id: i64 =
        sqlx::query_scalar("INSERT INTO categories (name) VALUES (?1) RETURNING category_id")
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;

    debug!(category_id, name = %name, "category created");
    Ok(category_id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_resolve_reuses_existing_row() {
        let db = test_db().await;
        let categories = db.categories();

        let first = categories.resolve_or_create("Bijela tehnika").await.unwrap();
        let second = categories.resolve_or_create("Bijela tehnika").await.unwrap();

        assert_eq!(first, second);
    }
}

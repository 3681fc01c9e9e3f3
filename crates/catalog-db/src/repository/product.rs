//! # Product Repository
//!
//! Database operations for the Product aggregate.
//!
//! ## Read Model: Light vs. Full
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Two-Phase Product Fetch                         │
//! │                                                                     │
//! │  get(id, light = true)                                              │
//! │  └── 1 query: scalars + brand/category names (joined)               │
//! │                                                                     │
//! │  get(id, light = false)                                             │
//! │  └── the light query, then:                                         │
//! │      ├── description                                                │
//! │      ├── images                                                     │
//! │      ├── feature values (joined with feature metadata)              │
//! │      ├── publication links                                          │
//! │      └── recommendations → light projections, ONE level deep        │
//! │                                                                     │
//! │  list() and search() return light projections only, so a browse     │
//! │  page never pays for the five extra queries.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Model
//! Create and update run as one transaction each. Update replaces every
//! child collection wholesale (delete all rows, reinsert the given set),
//! which keeps the aggregate consistent without diffing; child row ids
//! are therefore not stable across updates. Brand/category
//! resolve-or-create runs on the same transaction, so a failed write
//! leaves no orphaned rows behind.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, error, info};

use crate::error::{DbError, DbResult};
use crate::repository::{brand, category};
use catalog_core::{slug::slugify, validation::validate_product, Feature, Image, Product,
    ProductInput, Publication};

/// The light projection: product scalars plus resolved brand/category
/// display names. `description` and the child collections stay at their
/// defaults and are filled separately by the full fetch.
const LIGHT_SELECT: &str = "\
SELECT p.product_id, p.name, p.price, p.discount, p.quantity, p.url, p.recommended,
       p.created_at, p.updated_at, p.brand_id, b.name AS brand, p.category_id, c.name AS category
FROM products p
INNER JOIN brands b ON b.brand_id = p.brand_id
INNER JOIN categories c ON c.category_id = p.category_id";

/// Search projection: the light columns with the matched name rendered
/// through FTS5 `highlight()`, best match first (`rank` is ascending
/// bm25 relevance).
const SEARCH_SELECT: &str = "\
SELECT p.product_id, highlight(products_fts, 0, '<b>', '</b>') AS name,
       p.price, p.discount, p.quantity, p.url, p.recommended,
       p.created_at, p.updated_at, p.brand_id, b.name AS brand, p.category_id, c.name AS category
FROM products_fts
INNER JOIN products p ON p.product_id = products_fts.rowid
INNER JOIN brands b ON b.brand_id = p.brand_id
INNER JOIN categories c ON c.category_id = p.category_id
WHERE products_fts MATCH ?1
ORDER BY products_fts.rank
LIMIT ?2 OFFSET ?3";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Fetches a single product.
    ///
    /// ## Arguments
    /// * `product_id` - Product to fetch
    /// * `light` - When true, only the light projection (one query); when
    ///   false, also description, images, features, publications, and
    ///   recommendations (resolved to light projections, one level deep)
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No product row matches
    pub async fn get(&self, product_id: i64, light: bool) -> DbResult<Product> {
        debug!(product_id, light, "fetching product");

        let sql = format!("{LIGHT_SELECT}\nWHERE p.product_id = ?1");
        let mut product = sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", product_id.to_string()))?;

        if !light {
            self.load_details(&mut product).await?;
        }

        Ok(product)
    }

    /// Loads the heavy half of the aggregate into a light projection.
    async fn load_details(&self, product: &mut Product) -> DbResult<()> {
        product.description =
            sqlx::query_scalar("SELECT description FROM products WHERE product_id = ?1")
                .bind(product.product_id)
                .fetch_one(&self.pool)
                .await?;

        product.images = sqlx::query_as::<_, Image>(
            "SELECT product_image_id AS image_id, url
             FROM product_images
             WHERE product_id = ?1
             ORDER BY product_image_id",
        )
        .bind(product.product_id)
        .fetch_all(&self.pool)
        .await?;

        product.features = sqlx::query_as::<_, Feature>(
            "SELECT f.product_feature_id AS feature_id,
                    v.product_feature_value_id AS feature_value_id,
                    f.name, v.value, f.recommended
             FROM product_feature_values v
             INNER JOIN product_features f ON f.product_feature_id = v.product_feature_id
             WHERE v.product_id = ?1
             ORDER BY v.product_feature_value_id",
        )
        .bind(product.product_id)
        .fetch_all(&self.pool)
        .await?;

        product.publications = sqlx::query_as::<_, Publication>(
            "SELECT pub.publication_id, pub.name
             FROM product_publications link
             INNER JOIN publications pub ON pub.publication_id = link.publication_id
             WHERE link.product_id = ?1
             ORDER BY pub.publication_id",
        )
        .bind(product.product_id)
        .fetch_all(&self.pool)
        .await?;

        // Recommendations stay light: no recursive expansion.
        product.recommendations = sqlx::query_as::<_, Product>(
            "SELECT p.product_id, p.name, p.price, p.discount, p.quantity, p.url, p.recommended,
                    p.created_at, p.updated_at, p.brand_id, b.name AS brand,
                    p.category_id, c.name AS category
             FROM product_recommendations r
             INNER JOIN products p ON p.product_id = r.recommended_product_id
             INNER JOIN brands b ON b.brand_id = p.brand_id
             INNER JOIN categories c ON c.category_id = p.category_id
             WHERE r.product_id = ?1
             ORDER BY p.product_id",
        )
        .bind(product.product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists products as light projections, newest write first.
    ///
    /// No filtering; `limit` 0 or an `offset` past the end yield an empty
    /// page.
    pub async fn list(&self, offset: i64, limit: i64) -> DbResult<Vec<Product>> {
        debug!(offset, limit, "listing products");

        let sql = format!("{LIGHT_SELECT}\nORDER BY p.updated_at DESC\nLIMIT ?1 OFFSET ?2");
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Searches products by name, best match first.
    ///
    /// The raw query is reduced to quoted prefix terms before it reaches
    /// FTS5, so user punctuation cannot break the match expression.
    /// Tokenization, accent folding, relevance ranking, and the `<b>…</b>`
    /// match markup on the returned names are all the engine's
    /// (`unicode61 remove_diacritics 2`, bm25, `highlight()`).
    ///
    /// A query with no searchable terms returns an empty page.
    pub async fn search(&self, query: &str, offset: i64, limit: i64) -> DbResult<Vec<Product>> {
        let Some(match_expr) = fts_match_expression(query) else {
            return Ok(Vec::new());
        };

        debug!(query = %query, offset, limit, "searching products");

        let products = sqlx::query_as::<_, Product>(SEARCH_SELECT)
            .bind(&match_expr)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "search returned products");
        Ok(products)
    }

    /// Returns true iff any product changed strictly after `since`.
    ///
    /// Cheap polling signal for cache invalidation: callers remember the
    /// newest `updated_at` they have seen and ask again with it.
    pub async fn modified_since(&self, since: DateTime<Utc>) -> DbResult<bool> {
        let modified: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE updated_at > ?1)")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;

        Ok(modified)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Creates a product with its child collections and returns the full
    /// aggregate.
    ///
    /// ## What This Does
    /// 1. Validates required fields (name, price, brand, category - first
    ///    failure wins)
    /// 2. Derives the url slug from the name
    /// 3. In one transaction: resolves or creates brand/category when
    ///    their ids are 0, inserts the product row, then images, feature
    ///    values (creating feature rows for zero-id entries, scoped to
    ///    the resolved category), publication links, and recommendation
    ///    edges
    /// 4. Commits and re-fetches the full product
    ///
    /// Publications must already exist; linking an unknown one fails the
    /// whole transaction.
    pub async fn create(&self, input: ProductInput) -> DbResult<Product> {
        if let Err(err) = validate_product(&input) {
            error!(error = %err, "product create rejected");
            return Err(err.into());
        }

        let url = slugify(&input.name);
        let now = Utc::now();

        debug!(name = %input.name, url = %url, "creating product");

        let mut tx = self.pool.begin().await?;

        let brand_id = match input.brand_id {
            0 => brand::resolve_or_create(&mut tx, &input.brand).await?,
            id => id,
        };
        let category_id = match input.category_id {
            0 => category::resolve_or_create(&mut tx, &input.category).await?,
            id => id,
        };

        let product_id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, price, discount, quantity, description, url,
                                   recommended, created_at, updated_at, brand_id, category_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8, ?9, ?10)
             RETURNING product_id",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.discount)
        .bind(input.quantity)
        .bind(&input.description)
        .bind(&url)
        .bind(input.recommended)
        .bind(now)
        .bind(brand_id)
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;

        insert_children(&mut tx, product_id, category_id, &input).await?;

        tx.commit().await?;

        info!(product_id, "product created");
        self.get(product_id, false).await
    }

    /// Updates a product and its child collections wholesale, returning
    /// the full aggregate.
    ///
    /// Verifies the product exists before writing anything (NotFound
    /// otherwise). Within one transaction: updates the scalar row
    /// (advancing `updated_at`), then deletes and reinserts every child
    /// set - images, feature values, publication links, recommendation
    /// edges. Entries absent from the input are gone afterwards.
    pub async fn update(&self, input: ProductInput) -> DbResult<Product> {
        if let Err(err) = validate_product(&input) {
            error!(error = %err, "product update rejected");
            return Err(err.into());
        }

        let url = slugify(&input.name);
        let now = Utc::now();

        debug!(product_id = input.product_id, "updating product");

        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE product_id = ?1)")
                .bind(input.product_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            error!(product_id = input.product_id, "update of unknown product");
            return Err(DbError::not_found("Product", input.product_id.to_string()));
        }

        let brand_id = match input.brand_id {
            0 => brand::resolve_or_create(&mut tx, &input.brand).await?,
            id => id,
        };
        let category_id = match input.category_id {
            0 => category::resolve_or_create(&mut tx, &input.category).await?,
            id => id,
        };

        sqlx::query(
            "UPDATE products
             SET name = ?2, price = ?3, discount = ?4, quantity = ?5, description = ?6,
                 url = ?7, recommended = ?8, updated_at = ?9, brand_id = ?10, category_id = ?11
             WHERE product_id = ?1",
        )
        .bind(input.product_id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.discount)
        .bind(input.quantity)
        .bind(&input.description)
        .bind(&url)
        .bind(input.recommended)
        .bind(now)
        .bind(brand_id)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        delete_children(&mut tx, input.product_id).await?;
        insert_children(&mut tx, input.product_id, category_id, &input).await?;

        tx.commit().await?;

        info!(product_id = input.product_id, "product updated");
        self.get(input.product_id, false).await
    }
}

// =============================================================================
// Transaction Helpers
// =============================================================================

/// Inserts the child collections of a product on the caller's open
/// transaction.
///
/// A feature entry with `feature_id` 0 first creates the feature row,
/// scoped to the resolved category, then attaches the value to it.
async fn insert_children(
    conn: &mut SqliteConnection,
    product_id: i64,
    category_id: i64,
    input: &ProductInput,
) -> DbResult<()> {
    for image in &input.images {
        sqlx::query("INSERT INTO product_images (url, product_id) VALUES (?1, ?2)")
            .bind(&image.url)
            .bind(product_id)
            .execute(&mut *conn)
            .await?;
    }

    for feature in &input.features {
        let feature_id = match feature.feature_id {
            0 => {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO product_features (name, recommended, category_id)
                     VALUES (?1, ?2, ?3)
                     RETURNING product_feature_id",
                )
                .bind(&feature.name)
                .bind(feature.recommended)
                .bind(category_id)
                .fetch_one(&mut *conn)
                .await?
            }
            id => id,
        };

        sqlx::query(
            "INSERT INTO product_feature_values (value, product_feature_id, product_id)
             VALUES (?1, ?2, ?3)",
        )
        .bind(&feature.value)
        .bind(feature_id)
        .bind(product_id)
        .execute(&mut *conn)
        .await?;
    }

    for publication in &input.publications {
        sqlx::query("INSERT INTO product_publications (publication_id, product_id) VALUES (?1, ?2)")
            .bind(publication.publication_id)
            .bind(product_id)
            .execute(&mut *conn)
            .await?;
    }

    for recommendation in &input.recommendations {
        sqlx::query(
            "INSERT INTO product_recommendations (recommended_product_id, product_id)
             VALUES (?1, ?2)",
        )
        .bind(recommendation.product_id)
        .bind(product_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Deletes every child row of a product, ahead of a wholesale reinsert.
async fn delete_children(conn: &mut SqliteConnection, product_id: i64) -> DbResult<()> {
    for sql in [
        "DELETE FROM product_images WHERE product_id = ?1",
        "DELETE FROM product_feature_values WHERE product_id = ?1",
        "DELETE FROM product_publications WHERE product_id = ?1",
        "DELETE FROM product_recommendations WHERE product_id = ?1",
    ] {
        sqlx::query(sql)
            .bind(product_id)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Builds an FTS5 match expression from a raw user query.
///
/// Splits on anything non-alphanumeric and turns each term into a quoted
/// prefix token, so "samsung tv!" becomes `"samsung"* "tv"*` (implicit
/// AND). Returns `None` when nothing searchable remains.
fn fts_match_expression(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(|term| format!("\"{term}\"*"))
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" "))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use catalog_core::{
        FeatureInput, ImageInput, PublicationInput, RecommendationInput, ValidationError,
    };

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// A minimal valid input; tests extend it per scenario.
    fn washer_input() -> ProductInput {
        ProductInput {
            name: "Perilica rublja".to_string(),
            price: 39900,
            discount: 10,
            quantity: 4,
            description: "Perilica rublja, 8 kg, A klasa".to_string(),
            brand: "Gorenje".to_string(),
            category: "Bijela tehnika".to_string(),
            ..ProductInput::default()
        }
    }

    async fn add_publication(db: &Database, name: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO publications (name) VALUES (?1) RETURNING publication_id")
            .bind(name)
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    async fn count(db: &Database, sql: &str) -> i64 {
        sqlx::query_scalar(sql).fetch_one(db.pool()).await.unwrap()
    }

    // -------------------------------------------------------------------------
    // Create
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_round_trip() {
        let db = test_db().await;
        let products = db.products();

        let flyer = add_publication(&db, "Katalog 2026/08").await;

        let other = products.create(washer_input()).await.unwrap();

        let input = ProductInput {
            name: "Perilica rublja PRO".to_string(),
            images: vec![
                ImageInput {
                    url: "https://img.example/washer-front.jpg".to_string(),
                },
                ImageInput {
                    url: "https://img.example/washer-side.jpg".to_string(),
                },
            ],
            features: vec![FeatureInput {
                feature_id: 0,
                name: "Kapacitet".to_string(),
                value: "8 kg".to_string(),
                recommended: true,
            }],
            publications: vec![PublicationInput {
                publication_id: flyer,
            }],
            recommendations: vec![RecommendationInput {
                product_id: other.product_id,
            }],
            ..washer_input()
        };

        let created = products.create(input).await.unwrap();

        assert!(created.product_id > 0);
        assert_ne!(created.product_id, other.product_id);
        assert_eq!(created.url, "perilica-rublja-pro");
        assert_eq!(created.brand, "Gorenje");
        assert_eq!(created.category, "Bijela tehnika");
        assert_eq!(created.description, "Perilica rublja, 8 kg, A klasa");
        assert_eq!(created.images.len(), 2);
        assert_eq!(created.features.len(), 1);
        assert_eq!(created.features[0].name, "Kapacitet");
        assert!(created.features[0].feature_id > 0);
        assert_eq!(created.publications.len(), 1);
        assert_eq!(created.publications[0].name, "Katalog 2026/08");
        assert_eq!(created.recommendations.len(), 1);
        assert_eq!(created.recommendations[0].product_id, other.product_id);
        // Recommendations come back light: one level deep only.
        assert!(created.recommendations[0].images.is_empty());
        assert!(created.recommendations[0].description.is_empty());

        // The returned aggregate is exactly what a full get sees.
        let fetched = products.get(created.product_id, false).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_validation_order() {
        let db = test_db().await;
        let products = db.products();

        let cases = [
            (
                ProductInput::default(),
                ValidationError::MissingName,
            ),
            (
                ProductInput {
                    name: "Hladnjak".to_string(),
                    ..ProductInput::default()
                },
                ValidationError::MissingPrice,
            ),
            (
                ProductInput {
                    name: "Hladnjak".to_string(),
                    price: 100,
                    ..ProductInput::default()
                },
                ValidationError::MissingBrand,
            ),
            (
                ProductInput {
                    name: "Hladnjak".to_string(),
                    price: 100,
                    brand: "Gorenje".to_string(),
                    ..ProductInput::default()
                },
                ValidationError::MissingCategory,
            ),
        ];

        for (input, expected) in cases {
            match products.create(input).await {
                Err(DbError::Validation(err)) => assert_eq!(err, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
        }

        // Nothing was written along the way.
        assert_eq!(count(&db, "SELECT COUNT(*) FROM products").await, 0);
    }

    #[tokio::test]
    async fn test_create_reuses_brand_and_category_rows() {
        let db = test_db().await;
        let products = db.products();

        let first = products.create(washer_input()).await.unwrap();

        let mut input = washer_input();
        input.name = "Perilica rublja 9kg".to_string();
        let second = products.create(input).await.unwrap();

        assert_eq!(first.brand_id, second.brand_id);
        assert_eq!(first.category_id, second.category_id);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM brands").await, 1);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM categories").await, 1);

        // An explicit id skips resolution entirely.
        let mut input = washer_input();
        input.name = "Perilica rublja 10kg".to_string();
        input.brand_id = first.brand_id;
        input.category_id = first.category_id;
        let third = products.create(input).await.unwrap();
        assert_eq!(third.brand, "Gorenje");
        assert_eq!(count(&db, "SELECT COUNT(*) FROM brands").await, 1);
    }

    #[tokio::test]
    async fn test_create_failure_rolls_back_resolved_brand() {
        let db = test_db().await;
        let products = db.products();

        // Publication 999 does not exist, so the link insert violates the
        // foreign key and the whole transaction must roll back - including
        // the brand and category rows resolved earlier in it.
        let mut input = washer_input();
        input.publications = vec![PublicationInput {
            publication_id: 999,
        }];

        let err = products.create(input).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        assert_eq!(count(&db, "SELECT COUNT(*) FROM products").await, 0);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM brands").await, 0);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM categories").await, 0);
    }

    #[tokio::test]
    async fn test_zero_feature_id_creates_feature_once() {
        let db = test_db().await;
        let products = db.products();

        let mut input = washer_input();
        input.features = vec![FeatureInput {
            feature_id: 0,
            name: "Boja".to_string(),
            value: "bijela".to_string(),
            recommended: false,
        }];
        let created = products.create(input).await.unwrap();

        let feature_id = created.features[0].feature_id;
        assert!(feature_id > 0);
        assert_eq!(
            count(&db, "SELECT COUNT(*) FROM product_features").await,
            1
        );

        // The feature row is scoped to the product's category.
        let scoped: i64 = sqlx::query_scalar(
            "SELECT category_id FROM product_features WHERE product_feature_id = ?1",
        )
        .bind(feature_id)
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(scoped, created.category_id);

        // A second product reusing the id attaches a value without
        // creating another feature row.
        let mut input = washer_input();
        input.name = "Perilica rublja MINI".to_string();
        input.features = vec![FeatureInput {
            feature_id,
            name: String::new(),
            value: "crna".to_string(),
            recommended: false,
        }];
        let second = products.create(input).await.unwrap();

        assert_eq!(second.features[0].feature_id, feature_id);
        assert_eq!(second.features[0].name, "Boja");
        assert_eq!(
            count(&db, "SELECT COUNT(*) FROM product_features").await,
            1
        );
    }

    // -------------------------------------------------------------------------
    // Get
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_get_light_skips_details() {
        let db = test_db().await;
        let products = db.products();

        let mut input = washer_input();
        input.images = vec![ImageInput {
            url: "https://img.example/washer.jpg".to_string(),
        }];
        let created = products.create(input).await.unwrap();

        let light = products.get(created.product_id, true).await.unwrap();
        assert_eq!(light.name, "Perilica rublja");
        assert_eq!(light.brand, "Gorenje");
        assert!(light.description.is_empty());
        assert!(light.images.is_empty());

        let full = products.get(created.product_id, false).await.unwrap();
        assert_eq!(full.description, "Perilica rublja, 8 kg, A klasa");
        assert_eq!(full.images.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let db = test_db().await;

        let err = db.products().get(4242, true).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_unknown_id_writes_nothing() {
        let db = test_db().await;
        let products = db.products();

        let mut input = washer_input();
        input.product_id = 4242;
        input.brand = "Nepoznati brend".to_string();

        let err = products.update(input).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        // The existence check precedes every write, and the transaction
        // rolled back, so not even the brand resolution survived.
        assert_eq!(count(&db, "SELECT COUNT(*) FROM products").await, 0);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM brands").await, 0);
    }

    #[tokio::test]
    async fn test_update_replaces_child_sets() {
        let db = test_db().await;
        let products = db.products();

        let mut input = washer_input();
        input.images = vec![
            ImageInput {
                url: "https://img.example/1.jpg".to_string(),
            },
            ImageInput {
                url: "https://img.example/2.jpg".to_string(),
            },
            ImageInput {
                url: "https://img.example/3.jpg".to_string(),
            },
        ];
        input.features = vec![FeatureInput {
            feature_id: 0,
            name: "Kapacitet".to_string(),
            value: "8 kg".to_string(),
            recommended: false,
        }];
        let created = products.create(input).await.unwrap();
        assert_eq!(created.images.len(), 3);

        let mut input = washer_input();
        input.product_id = created.product_id;
        input.images = vec![ImageInput {
            url: "https://img.example/new.jpg".to_string(),
        }];
        // Features left empty: the old value must disappear.
        let updated = products.update(input).await.unwrap();

        assert_eq!(updated.images.len(), 1);
        assert_eq!(updated.images[0].url, "https://img.example/new.jpg");
        assert!(updated.features.is_empty());
        assert_eq!(
            count(&db, "SELECT COUNT(*) FROM product_images").await,
            1
        );
        assert_eq!(
            count(&db, "SELECT COUNT(*) FROM product_feature_values").await,
            0
        );
    }

    #[tokio::test]
    async fn test_update_advances_updated_at_and_slug() {
        let db = test_db().await;
        let products = db.products();

        let created = products.create(washer_input()).await.unwrap();
        assert_eq!(created.url, "perilica-rublja");

        let mut input = washer_input();
        input.product_id = created.product_id;
        input.name = "Perilica rublja Č-500".to_string();
        let updated = products.update(input).await.unwrap();

        assert_eq!(updated.url, "perilica-rublja-c-500");
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    // -------------------------------------------------------------------------
    // List
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_orders_by_recency_and_paginates() {
        let db = test_db().await;
        let products = db.products();

        let mut first = None;
        for name in ["Prvi proizvod", "Drugi proizvod", "Treći proizvod"] {
            let mut input = washer_input();
            input.name = name.to_string();
            let created = products.create(input).await.unwrap();
            first.get_or_insert(created.product_id);
        }

        let listed = products.list(0, 10).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Treći proizvod", "Drugi proizvod", "Prvi proizvod"]);

        // An update bumps the product back to the front.
        let first = first.unwrap();
        let mut input = washer_input();
        input.product_id = first;
        input.name = "Prvi proizvod".to_string();
        products.update(input).await.unwrap();

        let listed = products.list(0, 10).await.unwrap();
        assert_eq!(listed[0].product_id, first);

        // Pagination bounds.
        assert_eq!(products.list(0, 0).await.unwrap().len(), 0);
        assert_eq!(products.list(1, 1).await.unwrap().len(), 1);
        assert_eq!(products.list(10, 10).await.unwrap().len(), 0);
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_search_matches_and_highlights() {
        let db = test_db().await;
        let products = db.products();

        for name in ["Samsung Galaxy S21", "Samsung punjač 25W", "Gorenje perilica"] {
            let mut input = washer_input();
            input.name = name.to_string();
            products.create(input).await.unwrap();
        }

        let hits = products.search("samsung", 0, 10).await.unwrap();
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            assert!(
                hit.name.contains("<b>Samsung</b>"),
                "missing highlight in {:?}",
                hit.name
            );
        }

        let hits = products.search("galaxy", 0, 10).await.unwrap();
        assert_eq!(hits.len(), 1);

        // Prefix matching on partial terms.
        let hits = products.search("peril", 0, 10).await.unwrap();
        assert_eq!(hits.len(), 1);

        // Punctuation in the query must not break the match expression.
        let hits = products.search("samsung, galaxy!", 0, 10).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_search_is_accent_insensitive() {
        let db = test_db().await;
        let products = db.products();

        let mut input = washer_input();
        input.name = "Čaša za vino".to_string();
        products.create(input).await.unwrap();

        let hits = products.search("casa", 0, 10).await.unwrap();
        assert_eq!(hits.len(), 1);

        let hits = products.search("čaša", 0, 10).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_search_pagination_and_empty_query() {
        let db = test_db().await;
        let products = db.products();

        for name in ["Samsung TV 43", "Samsung TV 50", "Samsung TV 55"] {
            let mut input = washer_input();
            input.name = name.to_string();
            products.create(input).await.unwrap();
        }

        assert_eq!(products.search("samsung", 0, 2).await.unwrap().len(), 2);
        assert_eq!(products.search("samsung", 0, 0).await.unwrap().len(), 0);
        assert_eq!(products.search("samsung", 5, 10).await.unwrap().len(), 0);

        assert!(products.search("", 0, 10).await.unwrap().is_empty());
        assert!(products.search("   !!! ", 0, 10).await.unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Modified-since
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_modified_since_boundaries() {
        let db = test_db().await;
        let products = db.products();

        let long_ago = Utc::now() - chrono::Duration::days(1);
        assert!(!products.modified_since(long_ago).await.unwrap());

        let created = products.create(washer_input()).await.unwrap();

        assert!(products.modified_since(long_ago).await.unwrap());
        // Strictly greater: the latest updated_at itself is not "modified
        // since".
        assert!(!products.modified_since(created.updated_at).await.unwrap());

        let mut input = washer_input();
        input.product_id = created.product_id;
        products.update(input).await.unwrap();

        assert!(products.modified_since(created.updated_at).await.unwrap());
    }

    // -------------------------------------------------------------------------
    // Match expression
    // -------------------------------------------------------------------------

    #[test]
    fn test_fts_match_expression() {
        assert_eq!(
            fts_match_expression("samsung tv"),
            Some("\"samsung\"* \"tv\"*".to_string())
        );
        assert_eq!(
            fts_match_expression("  perilica, 8kg!  "),
            Some("\"perilica\"* \"8kg\"*".to_string())
        );
        assert_eq!(fts_match_expression(""), None);
        assert_eq!(fts_match_expression("?!."), None);
    }
}

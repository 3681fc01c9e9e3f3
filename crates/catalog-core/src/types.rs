//! # Domain Types
//!
//! The Product aggregate and the write input it is built from.
//!
//! ## Aggregate Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Product Aggregate                              │
//! │                                                                     │
//! │  ┌───────────────────────────────┐                                  │
//! │  │           Product             │   owns (replaced wholesale       │
//! │  │  ───────────────────────────  │   on every update):              │
//! │  │  product_id                   │                                  │
//! │  │  name, price, discount, ...   │──► Vec<Image>                    │
//! │  │  url (slug of name)           │──► Vec<Feature>                  │
//! │  │  brand_id    + brand name     │──► Vec<Publication>  (links)     │
//! │  │  category_id + category name  │──► Vec<Product>      (light      │
//! │  │  created_at / updated_at      │         recommendations, one     │
//! │  └───────────────────────────────┘         level deep)              │
//! │                                                                     │
//! │  Light projection = the scalar block only, children empty.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Shapes, One Aggregate
//! [`Product`] is what the store returns; [`ProductInput`] is what writers
//! send. The input is strongly typed but decodes leniently: every field
//! has a default, unknown fields are ignored, and only genuine type
//! mismatches fail (as [`ValidationError::Decode`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Product (read model)
// =============================================================================

/// A catalog product with its resolved brand/category names and, in the
/// full (non-light) projection, its owned child collections.
///
/// The collections and `description` are filled by separate queries in the
/// storage layer; the light projection leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Engine-assigned identifier.
    pub product_id: i64,

    /// Display name. Search results carry `<b>…</b>` match markup here.
    pub name: String,

    /// Price in minor currency units.
    pub price: i64,

    /// Discount percentage (0-100).
    pub discount: i64,

    /// Units in stock.
    pub quantity: i64,

    /// URL slug derived from `name`.
    pub url: String,

    /// Featured on the storefront landing page.
    pub recommended: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Advances on every successful write.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub brand_id: i64,

    /// Brand display name, joined in from `brands`.
    pub brand: String,

    pub category_id: i64,

    /// Category display name, joined in from `categories`.
    pub category: String,

    /// Long description. Empty in the light projection.
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub description: String,

    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub images: Vec<Image>,

    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub features: Vec<Feature>,

    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub publications: Vec<Publication>,

    /// Recommended products as light projections, one level deep only.
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub recommendations: Vec<Product>,
}

impl Product {
    /// Returns the list price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor_units(self.price)
    }

    /// Returns the price after applying the discount percentage.
    pub fn discounted_price(&self) -> Money {
        self.price().apply_discount_percent(self.discount)
    }
}

// =============================================================================
// Child Collections
// =============================================================================

/// A product image. Replaced wholesale on update, so `image_id` is not
/// stable across writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Image {
    pub image_id: i64,
    pub url: String,
}

/// A feature value attached to a product, joined with the feature row it
/// belongs to (`name` and `recommended` come from the feature, `value`
/// from the per-product value row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Feature {
    pub feature_id: i64,
    pub feature_value_id: i64,
    pub name: String,
    pub value: String,
    /// Shown in the storefront's comparison summary.
    pub recommended: bool,
}

/// A publication (catalog issue, flyer, ...) the product appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Publication {
    pub publication_id: i64,
    pub name: String,
}

// =============================================================================
// Write Input
// =============================================================================

/// Strongly-typed write input for product create/update.
///
/// Every field defaults, so partial payloads decode; validation (not
/// decoding) decides which fields are actually required. Identifier
/// fields use 0 as "not set": a zero `brand_id`/`category_id` means
/// resolve-or-create by name, a zero `product_id` is only valid for
/// create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProductInput {
    /// Target product for update; ignored by create.
    pub product_id: i64,
    pub name: String,
    pub price: i64,
    pub discount: i64,
    pub quantity: i64,
    pub description: String,
    pub recommended: bool,
    /// Existing brand id, or 0 to resolve-or-create by `brand`.
    pub brand_id: i64,
    pub brand: String,
    /// Existing category id, or 0 to resolve-or-create by `category`.
    pub category_id: i64,
    pub category: String,
    pub images: Vec<ImageInput>,
    pub features: Vec<FeatureInput>,
    pub publications: Vec<PublicationInput>,
    pub recommendations: Vec<RecommendationInput>,
}

impl ProductInput {
    /// Decodes a loose JSON value into a typed input.
    ///
    /// Unknown fields are ignored and missing fields default; only a
    /// genuine shape mismatch (wrong type, non-object payload) fails.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::ProductInput;
    /// use serde_json::json;
    ///
    /// let input = ProductInput::from_value(json!({
    ///     "name": "Perilica rublja",
    ///     "price": 39900,
    ///     "brand": "Gorenje",
    ///     "category": "Bijela tehnika",
    /// })).unwrap();
    /// assert_eq!(input.price, 39900);
    /// ```
    pub fn from_value(value: serde_json::Value) -> ValidationResult<Self> {
        serde_json::from_value(value).map_err(|e| ValidationError::Decode(e.to_string()))
    }
}

/// Image to attach; the id is assigned on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ImageInput {
    pub url: String,
}

/// Feature value to attach.
///
/// `feature_id` 0 means "create a new feature named `name`, scoped to the
/// product's category, then attach `value` to it".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FeatureInput {
    pub feature_id: i64,
    pub name: String,
    pub value: String,
    pub recommended: bool,
}

/// Link to an existing publication. Publications are never auto-created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PublicationInput {
    pub publication_id: i64,
}

/// Directed recommendation edge to another product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RecommendationInput {
    pub product_id: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

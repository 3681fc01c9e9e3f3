//! # Validation Error Types
//!
//! Errors raised while decoding and validating catalog write input.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  JSON payload                                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductInput::from_value ── shape mismatch ──► Decode              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate_product ── missing field ──► MissingName / MissingPrice / │
//! │       │                                MissingBrand / MissingCategory│
//! │       ▼                                                             │
//! │  catalog-db wraps either as DbError::Validation                     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-field messages are the user-facing strings the webshop has
//! always shown its (Croatian) back-office users; the API layer passes
//! them through verbatim.

use thiserror::Error;

/// Input validation failures for product create/update.
///
/// One variant per required field. Validation stops at the first failure;
/// there is no aggregation of multiple errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Product name is empty.
    #[error("Proizvod mora imati ime")]
    MissingName,

    /// Product price is zero.
    #[error("Proizvod mora imati cijenu")]
    MissingPrice,

    /// Brand display name is empty.
    #[error("Proizvod mora imati brend")]
    MissingBrand,

    /// Category display name is empty.
    #[error("Proizvod mora imati kategoriju")]
    MissingCategory,

    /// Input payload did not decode into the expected shape
    /// (wrong types, not an object, ...). Unknown fields never
    /// trigger this - they are ignored.
    #[error("Neispravan zapis proizvoda: {0}")]
    Decode(String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

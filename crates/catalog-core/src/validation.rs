//! # Validation Module
//!
//! Required-field checks for product writes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Input decoding (serde)                                    │
//! │  └── shape/type mismatches → ValidationError::Decode                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - required fields, fixed order                │
//! │  └── name → price → brand → category, first failure wins            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database constraints (NOT NULL, foreign keys)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductInput;

/// Validates the required fields of a product write.
///
/// Checks run in a fixed order - name, price, brand, category - and stop
/// at the first failure. The brand/category checks look at the display
/// name: a write must always carry one, even when it also carries a
/// resolved id.
///
/// ## Example
/// ```rust
/// use catalog_core::{validation::validate_product, ProductInput};
///
/// let input = ProductInput {
///     name: "Perilica rublja".to_string(),
///     price: 39900,
///     brand: "Gorenje".to_string(),
///     category: "Bijela tehnika".to_string(),
///     ..ProductInput::default()
/// };
/// assert!(validate_product(&input).is_ok());
/// ```
pub fn validate_product(input: &ProductInput) -> ValidationResult<()> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    if input.price == 0 {
        return Err(ValidationError::MissingPrice);
    }

    if input.brand.trim().is_empty() {
        return Err(ValidationError::MissingBrand);
    }

    if input.category.trim().is_empty() {
        return Err(ValidationError::MissingCategory);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # catalog-core: Pure Domain Logic for the Webshop Catalog
//!
//! The domain model behind the catalog store: the Product aggregate, the
//! strongly-typed write input, validation, slug derivation, and integer
//! money. Everything here is pure - no database, no network, no clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Admin / Storefront API (external)              │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌─────────┐    │   │
//! │  │   │  types  │  │  slug   │  │ validation │  │  money  │    │   │
//! │  │   │ Product │  │ slugify │  │   rules    │  │  Money  │    │   │
//! │  │   └─────────┘  └─────────┘  └────────────┘  └─────────┘    │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              catalog-db (SQLite repositories)               │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The Product aggregate, its children, and the write input
//! - [`slug`] - Deterministic URL slug derivation from product names
//! - [`validation`] - Required-field checks for create/update
//! - [`money`] - Integer minor-unit money (no floating point)
//! - [`error`] - Validation error type with user-facing messages

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod slug;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

//! # Repository Module
//!
//! Repository implementations for the catalog store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Here                          │
//! │                                                                     │
//! │  API handler                                                        │
//! │       │                                                             │
//! │       │  db.products().search("samsung", 0, 20)                     │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── get(&self, id, light)                                          │
//! │  ├── list / search / modified_since                                 │
//! │  └── create / update   ← single-transaction aggregate writes        │
//! │       │                                                             │
//! │       │  brand::resolve_or_create(&mut tx, name)                    │
//! │       ▼        (sibling repositories join the open transaction)     │
//! │  SQLite                                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - the Product aggregate: reads,
//!   search, change detection, transactional writes
//! - [`brand::BrandRepository`] / [`category::CategoryRepository`] -
//!   resolve-or-create for the dependent entities

pub mod brand;
pub mod category;
pub mod product;

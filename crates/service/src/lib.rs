//! Service layer for the store/item catalog.
//! - Owns the in-memory collections behind the `CatalogStore` trait.
//! - Implements identifier assignment and shallow-merge updates.
//! - Provides clear error types consumed by the HTTP layer.

pub mod errors;
pub mod storage;
pub mod catalog;

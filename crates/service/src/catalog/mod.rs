//! Store and item catalog.
//!
//! Two open-ended JSON collections keyed by server-assigned identifiers:
//! - `record`: the `Record` type, shallow merge, identifier fields
//! - `store`: the `CatalogStore` trait consumed by the HTTP layer
//! - `memory`: `InMemoryCatalog`, the process-lifetime implementation

pub mod record;
pub mod store;
pub mod memory;

pub use memory::{CatalogOptions, InMemoryCatalog};
pub use record::{Record, RecordKind, ITEM_ID, STORE_ID};
pub use store::CatalogStore;

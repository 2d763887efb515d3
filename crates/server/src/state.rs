use std::sync::Arc;

use configs::CatalogConfig;
use service::catalog::{CatalogOptions, CatalogStore, InMemoryCatalog};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Fresh, empty in-memory catalog configured from `[catalog]`.
    pub fn in_memory(cfg: &CatalogConfig) -> Self {
        let options = CatalogOptions { item_requires_store: cfg.item_requires_store };
        Self::new(InMemoryCatalog::new(options))
    }
}

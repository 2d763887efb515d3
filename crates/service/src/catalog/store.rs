use async_trait::async_trait;

use crate::catalog::record::Record;
use crate::errors::ServiceError;

/// Trait abstraction for the store/item catalog.
/// Implementations own both collections; handlers only see this trait.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_stores(&self) -> Vec<Record>;
    async fn get_store(&self, id: &str) -> Result<Record, ServiceError>;
    async fn add_store(&self, body: Record) -> Result<Record, ServiceError>;
    async fn update_store(&self, id: &str, patch: Record) -> Result<Record, ServiceError>;
    /// Remove a store and return it. Items referencing it are kept.
    async fn delete_store(&self, id: &str) -> Result<Record, ServiceError>;

    async fn list_items(&self) -> Vec<Record>;
    async fn get_item(&self, id: &str) -> Result<Record, ServiceError>;
    async fn add_item(&self, body: Record) -> Result<Record, ServiceError>;
    async fn update_item(&self, id: &str, patch: Record) -> Result<Record, ServiceError>;
    async fn delete_item(&self, id: &str) -> Result<Record, ServiceError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use common::ids::new_record_id;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::catalog::record::{merge, with_id, Record, RecordKind, STORE_ID};
use crate::catalog::store::CatalogStore;
use crate::errors::ServiceError;
use crate::storage::record_map::RecordMap;

/// Catalog policy knobs.
#[derive(Clone, Copy, Debug)]
pub struct CatalogOptions {
    /// When set, `add_item` (and an `update_item` that changes `Store_ID`)
    /// requires `Store_ID` to name an existing store.
    pub item_requires_store: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self { Self { item_requires_store: true } }
}

/// Process-lifetime catalog holding stores and items in memory.
/// Starts empty; everything is lost when the process exits.
#[derive(Clone)]
pub struct InMemoryCatalog {
    stores: Arc<RecordMap<String, Record>>,
    items: Arc<RecordMap<String, Record>>,
    options: CatalogOptions,
}

impl InMemoryCatalog {
    pub fn new(options: CatalogOptions) -> Arc<Self> {
        Arc::new(Self {
            stores: RecordMap::new(),
            items: RecordMap::new(),
            options,
        })
    }

    fn map(&self, kind: RecordKind) -> &RecordMap<String, Record> {
        match kind {
            RecordKind::Store => self.stores.as_ref(),
            RecordKind::Item => self.items.as_ref(),
        }
    }

    async fn get(&self, kind: RecordKind, id: &str) -> Result<Record, ServiceError> {
        self.map(kind)
            .get(&id.to_string())
            .await
            .ok_or_else(|| kind.not_found())
    }

    async fn add(&self, kind: RecordKind, body: Record) -> Record {
        let created = self
            .map(kind)
            .insert_new(new_record_id, |id| with_id(body, kind, id))
            .await;
        if let Some(Value::String(id)) = created.get(kind.id_field()) {
            info!(kind = kind.label(), %id, "record_created");
        }
        created
    }

    async fn update(&self, kind: RecordKind, id: &str, patch: Record) -> Result<Record, ServiceError> {
        let fields = patch.len();
        let merged = self
            .map(kind)
            .update(&id.to_string(), |existing| {
                merge(existing, patch, kind);
                existing.clone()
            })
            .await
            .ok_or_else(|| kind.not_found())?;
        debug!(kind = kind.label(), %id, fields, "record_updated");
        Ok(merged)
    }

    async fn delete(&self, kind: RecordKind, id: &str) -> Result<Record, ServiceError> {
        let removed = self
            .map(kind)
            .remove(&id.to_string())
            .await
            .ok_or_else(|| kind.not_found())?;
        info!(kind = kind.label(), %id, "record_deleted");
        Ok(removed)
    }

    /// Enforce the store-reference policy on an item payload.
    /// `required` says whether a missing `Store_ID` is an error.
    async fn check_store_ref(&self, body: &Record, required: bool) -> Result<(), ServiceError> {
        if !self.options.item_requires_store {
            return Ok(());
        }
        match body.get(STORE_ID) {
            None if required => Err(ServiceError::Validation(format!("{STORE_ID} is required"))),
            None => Ok(()),
            Some(Value::String(store_id)) => {
                if self.stores.contains_key(store_id).await {
                    Ok(())
                } else {
                    warn!(%store_id, "item references unknown store");
                    Err(RecordKind::Store.not_found())
                }
            }
            Some(_) => Err(ServiceError::Validation(format!("{STORE_ID} must be a string"))),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_stores(&self) -> Vec<Record> { self.stores.values().await }

    async fn get_store(&self, id: &str) -> Result<Record, ServiceError> {
        self.get(RecordKind::Store, id).await
    }

    async fn add_store(&self, body: Record) -> Result<Record, ServiceError> {
        Ok(self.add(RecordKind::Store, body).await)
    }

    #[instrument(skip(self, patch))]
    async fn update_store(&self, id: &str, patch: Record) -> Result<Record, ServiceError> {
        self.update(RecordKind::Store, id, patch).await
    }

    async fn delete_store(&self, id: &str) -> Result<Record, ServiceError> {
        self.delete(RecordKind::Store, id).await
    }

    async fn list_items(&self) -> Vec<Record> { self.items.values().await }

    async fn get_item(&self, id: &str) -> Result<Record, ServiceError> {
        self.get(RecordKind::Item, id).await
    }

    async fn add_item(&self, body: Record) -> Result<Record, ServiceError> {
        self.check_store_ref(&body, true).await?;
        Ok(self.add(RecordKind::Item, body).await)
    }

    #[instrument(skip(self, patch))]
    async fn update_item(&self, id: &str, patch: Record) -> Result<Record, ServiceError> {
        if !self.items.contains_key(&id.to_string()).await {
            return Err(RecordKind::Item.not_found());
        }
        self.check_store_ref(&patch, false).await?;
        self.update(RecordKind::Item, id, patch).await
    }

    async fn delete_item(&self, id: &str) -> Result<Record, ServiceError> {
        self.delete(RecordKind::Item, id).await
    }
}

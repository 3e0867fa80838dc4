//! Catalog service - drives `CatalogState` through the async lifecycle.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Item, ItemDraft, ItemId};
use crate::ports::{ApiResult, CatalogApi};
use crate::store::{CatalogChange, CatalogOp, CatalogState, Settlement};

/// Service for catalog operations against the backend.
///
/// Each operation runs in three steps: mark the state pending, await the
/// port without holding the lock, then settle. Concurrent operations may
/// interleave; whichever settles last decides the status.
///
/// Clones share the same state and API.
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
    state: Arc<RwLock<CatalogState>>,
}

impl CatalogService {
    /// Create a service with an empty, idle catalog.
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(CatalogState::new())),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Copy of the current items.
    pub async fn items(&self) -> Vec<Item> {
        self.state.read().await.items().to_vec()
    }

    /// Copy of one loaded item, if present.
    pub async fn item(&self, id: ItemId) -> Option<Item> {
        self.state.read().await.item(id).cloned()
    }

    /// Replace the catalog with the server's item list.
    pub async fn fetch_items(&self) -> Settlement {
        self.run(CatalogOp::Fetch, async {
            self.api.list_items().await.map(CatalogChange::Replaced)
        })
        .await
    }

    /// Create an item and append the server's copy on success.
    pub async fn create_item(&self, draft: &ItemDraft) -> Settlement {
        self.run(CatalogOp::Create, async {
            self.api.create_item(draft).await.map(CatalogChange::Appended)
        })
        .await
    }

    /// Delete an item and drop it from the catalog on success.
    pub async fn delete_item_by_id(&self, id: ItemId) -> Settlement {
        self.run(CatalogOp::Delete(id), async {
            self.api
                .delete_item(id)
                .await
                .map(|()| CatalogChange::Removed(id))
        })
        .await
    }

    /// Look up a single item on the server.
    ///
    /// Does not touch the catalog state.
    pub async fn get_item(&self, id: ItemId) -> ApiResult<Item> {
        self.api.get_item(id).await
    }

    /// Drop a recorded error, leaving items and any pending status alone.
    pub async fn clear_error(&self) {
        self.state.write().await.clear_error();
    }

    async fn run<F>(&self, op: CatalogOp, call: F) -> Settlement
    where
        F: Future<Output = ApiResult<CatalogChange>>,
    {
        self.state.write().await.begin(op);

        let result = call.await;

        let mut state = self.state.write().await;
        match result {
            Ok(change) => {
                state.fulfill(change);
                tracing::info!(%op, items = state.items().len(), "catalog operation fulfilled");
                Settlement::Fulfilled
            }
            Err(err) => {
                let message = op.rejection_message(&err);
                tracing::warn!(%op, error = %message, "catalog operation rejected");
                state.reject(message.clone());
                Settlement::Rejected { message }
            }
        }
    }
}

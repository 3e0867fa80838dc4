//! Catalog backend port trait.

use async_trait::async_trait;

use super::error::ApiResult;
use crate::domain::{Item, ItemDraft, ItemId};

/// Port trait for the items REST service.
///
/// This trait defines the interface that the catalog store uses to reach
/// the backend. The HTTP implementation lives in `storefront-http`.
///
/// # Design
///
/// - Uses core-owned domain types, not wire types
/// - Returns `ApiError` for all failures, with 404 mapped to `NotFound`
/// - No retries, no pagination
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /items/`: every item, in server order.
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// `GET /items/{id}`: a single item.
    async fn get_item(&self, id: ItemId) -> ApiResult<Item>;

    /// `POST /items/`: create an item; the server assigns the ID.
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item>;

    /// `DELETE /items/{id}`: success implies removal.
    async fn delete_item(&self, id: ItemId) -> ApiResult<()>;
}

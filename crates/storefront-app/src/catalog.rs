//! Catalog operations for the storefront facade.

use storefront_core::{ItemForm, ItemId, filter_items};

use crate::deps::StorefrontDeps;
use crate::error::AppError;
use crate::types::{CatalogView, ItemView};

/// Catalog operations handler.
pub struct CatalogOps<'a> {
    deps: &'a StorefrontDeps,
}

impl<'a> CatalogOps<'a> {
    pub const fn new(deps: &'a StorefrontDeps) -> Self {
        Self { deps }
    }

    /// Current catalog, unfiltered.
    pub async fn view(&self) -> CatalogView {
        CatalogView::from_state(&self.deps.catalog().snapshot().await)
    }

    /// Current catalog filtered by `term`.
    pub async fn search(&self, term: &str) -> CatalogView {
        let state = self.deps.catalog().snapshot().await;
        let results = filter_items(state.items(), term);
        CatalogView::from_search(&state, &results)
    }

    /// Reload the catalog from the backend.
    pub async fn refresh(&self) -> Result<CatalogView, AppError> {
        let settlement = self.deps.catalog().fetch_items().await;
        AppError::from_settlement(settlement)?;
        Ok(self.view().await)
    }

    /// Validate the form and create the item it describes.
    ///
    /// An invalid form never reaches the backend. On success the form is
    /// reset.
    pub async fn create(&self, form: &mut ItemForm) -> Result<(), AppError> {
        let draft = form.validate()?;
        let settlement = self.deps.catalog().create_item(&draft).await;
        AppError::from_settlement(settlement)?;
        tracing::info!(name = %draft.name, "item created");
        form.reset();
        Ok(())
    }

    /// Delete an item from the backend and the catalog.
    pub async fn delete(&self, id: ItemId) -> Result<(), AppError> {
        let settlement = self.deps.catalog().delete_item_by_id(id).await;
        AppError::from_settlement(settlement)
    }

    /// Fetch a single item from the backend.
    pub async fn get(&self, id: ItemId) -> Result<ItemView, AppError> {
        let item = self.deps.catalog().get_item(id).await?;
        Ok(ItemView::from_item(&item))
    }

    /// Dismiss the catalog error banner.
    pub async fn clear_error(&self) {
        self.deps.catalog().clear_error().await;
    }
}

//! Port trait implementation for `CatalogClient`.
//!
//! This module implements the core-owned `CatalogApi` trait, translating
//! internal HTTP errors into `ApiError` at the boundary.

use async_trait::async_trait;
use storefront_core::{ApiError, ApiResult, CatalogApi, Item, ItemDraft, ItemId};

use crate::client::CatalogClient;
use crate::error::HttpError;
use crate::http::HttpBackend;

/// Message for failures that never produced a response.
const NETWORK_ERROR: &str = "Network Error";

// ============================================================================
// Error Mapping
// ============================================================================

impl<B: HttpBackend> CatalogClient<B> {
    /// Convert an internal `HttpError` to the core `ApiError`.
    ///
    /// `id` is the item addressed by the request; only then does a 404
    /// become `NotFound`.
    fn map_error(&self, err: HttpError, id: Option<ItemId>) -> ApiError {
        if let Some(id) = id.filter(|_| err.is_not_found()) {
            return ApiError::NotFound { id };
        }
        match err {
            HttpError::Status { status, url } => {
                tracing::debug!(%url, status, "items API returned an error status");
                ApiError::Status { status }
            }
            HttpError::Network(e) if e.is_timeout() => ApiError::Timeout {
                timeout_ms: self.config.timeout_ms(),
            },
            HttpError::Network(e) if e.is_decode() => ApiError::InvalidResponse {
                message: e.to_string(),
            },
            HttpError::Network(e) if e.is_builder() => ApiError::Configuration {
                message: e.to_string(),
            },
            HttpError::Network(e) => {
                tracing::debug!(error = %e, "items API unreachable");
                ApiError::network(NETWORK_ERROR)
            }
            HttpError::InvalidUrl(e) => ApiError::Configuration {
                message: e.to_string(),
            },
            HttpError::JsonParse(e) => ApiError::InvalidResponse {
                message: e.to_string(),
            },
        }
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CatalogApi for CatalogClient<B> {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        self.fetch_items()
            .await
            .map_err(|err| self.map_error(err, None))
    }

    async fn get_item(&self, id: ItemId) -> ApiResult<Item> {
        self.fetch_item(id)
            .await
            .map_err(|err| self.map_error(err, Some(id)))
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.post_item(draft)
            .await
            .map_err(|err| self.map_error(err, None))
    }

    async fn delete_item(&self, id: ItemId) -> ApiResult<()> {
        self.remove_item(id)
            .await
            .map_err(|err| self.map_error(err, Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{item_json, test_config};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn client(backend: FakeBackend) -> CatalogClient<FakeBackend> {
        CatalogClient::with_backend(test_config(), backend)
    }

    #[tokio::test]
    async fn test_list_items_through_port() {
        let backend = FakeBackend::new().with_response(
            "GET",
            "/items/",
            CannedResponse::Json(json!([item_json(2, "Lamp", "80"), item_json(1, "Bed", "300")])),
        );
        let api: &dyn CatalogApi = &client(backend);

        let ids: Vec<_> = api.list_items().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_delete_404_is_item_not_found() {
        let client = client(FakeBackend::new());

        let err = client.delete_item(9).await.unwrap_err();

        assert_eq!(err, ApiError::NotFound { id: 9 });
        assert_eq!(err.to_string(), "Item not found");
    }

    #[tokio::test]
    async fn test_get_404_is_item_not_found() {
        let err = client(FakeBackend::new()).get_item(4).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_404_is_plain_status() {
        let err = client(FakeBackend::new()).list_items().await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 404 });
    }

    #[tokio::test]
    async fn test_create_404_is_plain_status() {
        let err = client(FakeBackend::new())
            .create_item(&ItemDraft::new("Lamp", "80", "img/lamp.jpg"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 404 });
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let backend =
            FakeBackend::new().with_response("POST", "/items/", CannedResponse::Status(500));
        let err = client(backend)
            .create_item(&ItemDraft::new("Lamp", "80", "img/lamp.jpg"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let backend = FakeBackend::new().with_response(
            "GET",
            "/items/3",
            CannedResponse::Json(json!({"id": "three"})),
        );
        let err = client(backend).get_item(3).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }
}

//! HTTP backend abstraction for the items API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. Requests are sent exactly once;
//! retrying is left to the user.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ResolvedConfig;
use crate::error::{HttpError, HttpResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the items API.
///
/// This is an implementation detail - external code should use the
/// `CatalogApi` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `GET` a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T>;

    /// `POST` a JSON body and deserialize the JSON answer.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> HttpResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;

    /// `DELETE` a URL, ignoring any response body.
    async fn delete(&self, url: &Url) -> HttpResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request carries `Content-Type: application/json` and is bounded by
/// the configured timeout.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ResolvedConfig) -> HttpResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Send a request and fail on any non-success status.
    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> HttpResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "items API responded");

        if status.is_success() {
            Ok(response)
        } else {
            Err(HttpError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    /// Read the whole body and decode it as JSON.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> HttpResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T> {
        let response = self.send(self.client.get(url.as_str()), url).await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, url: &Url, body: &B) -> HttpResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let payload = serde_json::to_vec(body)?;
        let request = self.client.post(url.as_str()).body(payload);
        let response = self.send(request, url).await?;
        Self::decode(response).await
    }

    async fn delete(&self, url: &Url) -> HttpResult<()> {
        self.send(self.client.delete(url.as_str()), url).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

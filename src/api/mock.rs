// SPDX-License-Identifier: MPL-2.0
//! Scripted [`ProductApi`] for tests.
//!
//! Responses are queued per operation and consumed in order. Every call is
//! recorded, including calls that find no scripted response (those fail with
//! [`ApiError::Transport`]).
//!
//! ```ignore
//! let api = MockProductApi::new();
//! api.push_list(Ok(vec![caneta]));
//! let products = api.list_products().await?;
//! assert_eq!(api.calls(), vec![ApiCall::List]);
//! ```

use super::ProductApi;
use crate::domain::{NewProduct, Product, ProductId};
use crate::error::ApiError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use url::Url;

/// One recorded call against the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create(NewProduct),
    Delete(ProductId),
    FetchImage(Url),
}

#[derive(Default)]
struct Script {
    list: VecDeque<Result<Vec<Product>, ApiError>>,
    create: VecDeque<Result<Product, ApiError>>,
    delete: VecDeque<Result<serde_json::Value, ApiError>>,
    images: VecDeque<Result<Vec<u8>, ApiError>>,
    calls: Vec<ApiCall>,
}

/// Test double with per-operation response queues. Clones share state.
#[derive(Clone)]
pub struct MockProductApi {
    base_url: Url,
    script: Arc<Mutex<Script>>,
}

impl Default for MockProductApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProductApi {
    /// Mock rooted at `http://localhost:8000/api/`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(crate::config::default_api_base_url())
    }

    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            script: Arc::new(Mutex::new(Script::default())),
        }
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push_list(&self, response: Result<Vec<Product>, ApiError>) {
        self.script().list.push_back(response);
    }

    pub fn push_create(&self, response: Result<Product, ApiError>) {
        self.script().create.push_back(response);
    }

    pub fn push_delete(&self, response: Result<serde_json::Value, ApiError>) {
        self.script().delete.push_back(response);
    }

    pub fn push_image(&self, response: Result<Vec<u8>, ApiError>) {
        self.script().images.push_back(response);
    }

    /// Calls received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.script().calls.clone()
    }
}

fn unscripted<T>(operation: &str) -> Result<T, ApiError> {
    Err(ApiError::Transport(format!(
        "no scripted response for {operation}"
    )))
}

#[async_trait]
impl ProductApi for MockProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::List);
        script.list.pop_front().unwrap_or_else(|| unscripted("list"))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::Create(product));
        script
            .create
            .pop_front()
            .unwrap_or_else(|| unscripted("create"))
    }

    async fn delete_product(&self, id: ProductId) -> Result<serde_json::Value, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::Delete(id));
        script
            .delete
            .pop_front()
            .unwrap_or_else(|| unscripted("delete"))
    }

    async fn fetch_image(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::FetchImage(url));
        script
            .images
            .pop_front()
            .unwrap_or_else(|| unscripted("fetch_image"))
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let api = MockProductApi::new();
        api.push_delete(Ok(serde_json::Value::Null));
        api.push_delete(Err(ApiError::Status {
            status: 404,
            detail: None,
        }));

        assert!(api.delete_product(ProductId::new(1)).await.is_ok());
        assert!(api.delete_product(ProductId::new(2)).await.is_err());
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Delete(ProductId::new(1)),
                ApiCall::Delete(ProductId::new(2))
            ]
        );
    }

    #[tokio::test]
    async fn unscripted_call_fails_but_is_recorded() {
        let api = MockProductApi::new();
        let err = api.list_products().await.expect_err("unscripted");
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(api.calls(), vec![ApiCall::List]);
    }

    #[test]
    fn clones_share_the_script() {
        let api = MockProductApi::new();
        let clone = api.clone();
        clone.push_list(Ok(Vec::new()));
        assert_eq!(api.script().list.len(), 1);
    }
}

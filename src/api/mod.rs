// SPDX-License-Identifier: MPL-2.0
//! Remote catalog API.
//!
//! [`ProductApi`] is the port the view talks to. [`HttpProductApi`] implements
//! it over HTTP with `reqwest`; [`mock::MockProductApi`] is a scripted double
//! for tests.
//!
//! Every operation returns the same [`ApiError`] type whatever went wrong.
//! Implementations log failures themselves so callers only have to decide what
//! the user sees.

pub mod http;
pub mod mock;

pub use http::HttpProductApi;

use crate::domain::{NewProduct, Product, ProductId};
use crate::error::ApiError;
use async_trait::async_trait;
use url::Url;

/// Operations offered by the remote catalog.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Lists all products in server order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Creates a product from a multipart upload and returns the stored record.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError>;

    /// Deletes a product. The confirmation payload is opaque.
    async fn delete_product(&self, id: ProductId) -> Result<serde_json::Value, ApiError>;

    /// Downloads the bytes behind a resolved image URL.
    async fn fetch_image(&self, url: Url) -> Result<Vec<u8>, ApiError>;

    /// Base address image references are resolved against.
    fn base_url(&self) -> &Url;
}

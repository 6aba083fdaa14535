// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the catalog API.
//!
//! Endpoints (relative to the configured base, which always ends with `/`):
//!
//! | Operation | Request                                   |
//! |-----------|-------------------------------------------|
//! | list      | `GET produtos/`                           |
//! | create    | `POST produtos/` (multipart form)         |
//! | delete    | `DELETE produtos/{id}/`                   |
//!
//! No retry and no timeout beyond what `reqwest` does by default.

use super::ProductApi;
use crate::domain::{NewProduct, Product, ProductId};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use url::Url;

/// Collection endpoint, relative to the base URL.
pub const COLLECTION_PATH: &str = "produtos/";

const USER_AGENT: &str = concat!("CatalogDesk/", env!("CARGO_PKG_VERSION"));

/// Multipart field names expected by the server.
mod fields {
    pub const NAME: &str = "nome";
    pub const PRICE: &str = "preco";
    pub const STOCK: &str = "estoque";
    pub const IMAGE: &str = "imagem";
}

/// [`ProductApi`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: Url,
}

impl HttpProductApi {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    /// URL of the product collection.
    pub fn collection_url(&self) -> Result<Url, ApiError> {
        Ok(self.base_url.join(COLLECTION_PATH)?)
    }

    /// URL of a single product.
    pub fn resource_url(&self, id: ProductId) -> Result<Url, ApiError> {
        Ok(self.base_url.join(&format!("{COLLECTION_PATH}{id}/"))?)
    }

    async fn send_list(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "listing products");

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<Product>>().await?)
    }

    async fn send_create(&self, product: NewProduct) -> Result<Product, ApiError> {
        let url = self.collection_url()?;
        let NewProduct {
            name,
            price,
            stock,
            image,
        } = product;
        tracing::debug!(%url, %name, image = image.file_name(), "creating product");

        let mime = image.mime_type();
        let file_name = image.file_name().to_owned();
        let part = Part::bytes(image.into_bytes())
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;

        let form = Form::new()
            .text(fields::NAME, name)
            .text(fields::PRICE, price)
            .text(fields::STOCK, stock)
            .part(fields::IMAGE, part);

        let response = self.client.post(url).multipart(form).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Product>().await?)
    }

    async fn send_delete(&self, id: ProductId) -> Result<serde_json::Value, ApiError> {
        let url = self.resource_url(id)?;
        tracing::debug!(%url, "deleting product");

        let response = self.client.delete(url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        Ok(opaque_payload(&body))
    }

    async fn send_fetch_image(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.send_list()
            .await
            .inspect_err(|err| log_failure("list", err))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        self.send_create(product)
            .await
            .inspect_err(|err| log_failure("create", err))
    }

    async fn delete_product(&self, id: ProductId) -> Result<serde_json::Value, ApiError> {
        self.send_delete(id)
            .await
            .inspect_err(|err| log_failure("delete", err))
    }

    async fn fetch_image(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let target = url.to_string();
        self.send_fetch_image(url).await.inspect_err(|err| {
            tracing::warn!(url = %target, error = %err, "failed to fetch product image");
        })
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Ensures the base path ends with `/` so joins keep its last segment.
#[must_use]
pub fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Turns a non-success response into [`ApiError::Status`], keeping its body.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty());

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

/// Confirmation payloads are passed through untouched: JSON when it parses,
/// the raw text otherwise, `Null` for an empty body.
fn opaque_payload(body: &[u8]) -> serde_json::Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn log_failure(operation: &'static str, err: &ApiError) {
    match err.detail() {
        Some(detail) => tracing::error!(operation, %detail, error = %err, "catalog request failed"),
        None => tracing::error!(operation, error = %err, "catalog request failed"),
    }
}

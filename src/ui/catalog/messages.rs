// SPDX-License-Identifier: MPL-2.0
//! Catalog message and effect types re-exported by the facade.

use crate::domain::{DraftField, ImageUpload, NewProduct, Product, ProductId};
use crate::error::ApiError;
use url::Url;

/// Messages handled by the catalog view.
#[derive(Debug, Clone)]
pub enum Message {
    /// User asked to fetch the product list again.
    Reload,
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    FieldChanged(DraftField, String),
    /// Open the image picker.
    PickImage,
    /// Picker closed; `None` when the user cancelled.
    ImagePicked(Option<ImageUpload>),
    Submit,
    ProductCreated(Result<Product, ApiError>),
    Delete(ProductId),
    ProductDeleted {
        id: ProductId,
        result: Result<serde_json::Value, ApiError>,
    },
    ThumbnailLoaded {
        id: ProductId,
        result: Result<Vec<u8>, ApiError>,
    },
}

/// Side effect requested by [`State::update`](super::State::update).
///
/// The application root turns each effect into an async task whose outcome
/// comes back as a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    LoadProducts,
    CreateProduct(NewProduct),
    DeleteProduct(ProductId),
    PickImage,
    FetchThumbnails(Vec<(ProductId, Url)>),
}

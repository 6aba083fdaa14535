// SPDX-License-Identifier: MPL-2.0
//! Runs catalog effects against the product API.
//!
//! Each effect becomes an iced [`Task`] whose result is delivered back to the
//! catalog as a [`catalog::Message`].

use crate::api::ProductApi;
use crate::domain::{ImageUpload, NewProduct, Product, ProductId, IMAGE_EXTENSIONS};
use crate::error::ApiError;
use crate::ui::catalog::{self, Effect};
use iced::Task;
use std::sync::Arc;
use url::Url;

/// Turns `effect` into the task that carries it out.
pub fn perform(api: Arc<dyn ProductApi>, effect: Effect) -> Task<catalog::Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::LoadProducts => Task::perform(
            load_products(api),
            catalog::Message::ProductsLoaded,
        ),
        Effect::CreateProduct(product) => Task::perform(
            create_product(api, product),
            catalog::Message::ProductCreated,
        ),
        Effect::DeleteProduct(id) => Task::perform(delete_product(api, id), move |result| {
            catalog::Message::ProductDeleted { id, result }
        }),
        Effect::PickImage => Task::perform(pick_image(), catalog::Message::ImagePicked),
        Effect::FetchThumbnails(requests) => {
            Task::batch(requests.into_iter().map(|(id, url)| {
                Task::perform(fetch_thumbnail(Arc::clone(&api), url), move |result| {
                    catalog::Message::ThumbnailLoaded { id, result }
                })
            }))
        }
    }
}

pub async fn load_products(api: Arc<dyn ProductApi>) -> Result<Vec<Product>, ApiError> {
    api.list_products().await
}

pub async fn create_product(
    api: Arc<dyn ProductApi>,
    product: NewProduct,
) -> Result<Product, ApiError> {
    api.create_product(product).await
}

pub async fn delete_product(
    api: Arc<dyn ProductApi>,
    id: ProductId,
) -> Result<serde_json::Value, ApiError> {
    api.delete_product(id).await
}

pub async fn fetch_thumbnail(api: Arc<dyn ProductApi>, url: Url) -> Result<Vec<u8>, ApiError> {
    api.fetch_image(url).await
}

/// Opens the native file picker and reads the chosen image.
///
/// Returns `None` when the user cancels or the file cannot be read.
pub async fn pick_image() -> Option<ImageUpload> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    let file_name = handle.file_name();
    let bytes = handle.read().await;
    if bytes.is_empty() {
        tracing::warn!(%file_name, "picked image is empty or unreadable");
        return None;
    }
    tracing::debug!(%file_name, len = bytes.len(), "image picked");
    Some(ImageUpload::new(file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{ApiCall, MockProductApi};
    use crate::domain::ImageRef;

    fn caneta() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Caneta".into(),
            price: "2.50".into(),
            stock: "10".into(),
            image: Some(ImageRef::new("/img/1.png")),
        }
    }

    #[tokio::test]
    async fn load_products_returns_api_listing() {
        let mock = MockProductApi::new();
        mock.push_list(Ok(vec![caneta()]));

        let products = load_products(Arc::new(mock.clone())).await.expect("listing");

        assert_eq!(products, vec![caneta()]);
        assert_eq!(mock.calls(), vec![ApiCall::List]);
    }

    #[tokio::test]
    async fn create_product_forwards_payload() {
        let mock = MockProductApi::new();
        mock.push_create(Ok(caneta()));
        let payload = NewProduct {
            name: "Caneta".into(),
            price: "2.50".into(),
            stock: "10".into(),
            image: ImageUpload::new("caneta.png", vec![1, 2]),
        };

        let created = create_product(Arc::new(mock.clone()), payload.clone())
            .await
            .expect("created");

        assert_eq!(created.id, ProductId::new(1));
        assert_eq!(mock.calls(), vec![ApiCall::Create(payload)]);
    }

    #[tokio::test]
    async fn delete_product_propagates_failure() {
        let mock = MockProductApi::new();
        mock.push_delete(Err(ApiError::Status {
            status: 404,
            detail: None,
        }));

        let result = delete_product(Arc::new(mock.clone()), ProductId::new(7)).await;

        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
        assert_eq!(mock.calls(), vec![ApiCall::Delete(ProductId::new(7))]);
    }

    #[tokio::test]
    async fn fetch_thumbnail_requests_given_url() {
        let mock = MockProductApi::new();
        mock.push_image(Ok(vec![0x89, b'P']));
        let url = Url::parse("http://localhost:8000/img/1.png").expect("url");

        let bytes = fetch_thumbnail(Arc::new(mock.clone()), url.clone())
            .await
            .expect("bytes");

        assert_eq!(bytes, vec![0x89, b'P']);
        assert_eq!(mock.calls(), vec![ApiCall::FetchImage(url)]);
    }

    #[test]
    fn picker_extensions_have_known_mime_types() {
        for ext in IMAGE_EXTENSIONS {
            let upload = ImageUpload::new(format!("picked.{ext}"), Vec::new());
            assert_ne!(upload.mime_type(), "application/octet-stream", "{ext}");
        }
    }

    #[test]
    fn perform_none_makes_no_calls() {
        let mock = MockProductApi::new();
        let _task = perform(Arc::new(mock.clone()), Effect::None);
        assert!(mock.calls().is_empty());
    }
}

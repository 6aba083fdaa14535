// SPDX-License-Identifier: MPL-2.0
//! Catalog view state and its update logic.

use super::messages::{Effect, Message};
use crate::domain::{DraftField, Product, ProductDraft, ProductId, ProductList};
use crate::error::ApiError;
use iced::widget::image;
use std::collections::{HashMap, HashSet};
use url::Url;

/// Outcome of the most recent create or delete, shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Created,
    CreateFailed(ApiError),
    Deleted,
    DeleteFailed(ApiError),
}

impl Status {
    /// Returns the i18n key of the status line.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Status::Created => "catalog-status-created",
            Status::CreateFailed(_) => "catalog-status-create-failed",
            Status::Deleted => "catalog-status-deleted",
            Status::DeleteFailed(_) => "catalog-status-delete-failed",
        }
    }

    /// Returns the i18n key explaining a failure, if this is one.
    #[must_use]
    pub fn cause_key(&self) -> Option<&'static str> {
        match self {
            Status::CreateFailed(err) | Status::DeleteFailed(err) => Some(err.i18n_key()),
            Status::Created | Status::Deleted => None,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.cause_key().is_some()
    }
}

/// Local UI state for the catalog screen.
#[derive(Debug)]
pub struct State {
    /// `None` until a listing succeeds.
    products: Option<ProductList>,
    draft: ProductDraft,
    status: Option<Status>,
    loading: bool,
    creating: bool,
    deleting: HashSet<ProductId>,
    thumbnails: HashMap<ProductId, image::Handle>,
    /// Bumped by every successful create or delete.
    revision: u64,
    /// `revision` when the pending listing was requested.
    load_revision: u64,
    /// Base image references are resolved against.
    image_base: Url,
}

impl State {
    #[must_use]
    pub fn new(image_base: Url) -> Self {
        Self {
            products: None,
            draft: ProductDraft::new(),
            status: None,
            loading: false,
            creating: false,
            deleting: HashSet::new(),
            thumbnails: HashMap::new(),
            revision: 0,
            load_revision: 0,
            image_base,
        }
    }

    /// Starts the initial listing.
    pub fn init(&mut self) -> Effect {
        self.loading = true;
        self.load_revision = self.revision;
        Effect::LoadProducts
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Reload => {
                if self.loading {
                    return Effect::None;
                }
                self.init()
            }
            Message::ProductsLoaded(result) => self.handle_products_loaded(result),
            Message::FieldChanged(field, value) => {
                self.draft.set_field(field, value);
                Effect::None
            }
            Message::PickImage => Effect::PickImage,
            Message::ImagePicked(Some(upload)) => {
                self.draft.set_image(upload);
                Effect::None
            }
            Message::ImagePicked(None) => Effect::None,
            Message::Submit => self.handle_submit(),
            Message::ProductCreated(result) => self.handle_product_created(result),
            Message::Delete(id) => {
                if !self.deleting.insert(id) {
                    tracing::debug!(%id, "delete already in flight");
                    return Effect::None;
                }
                Effect::DeleteProduct(id)
            }
            Message::ProductDeleted { id, result } => self.handle_product_deleted(id, result),
            Message::ThumbnailLoaded { id, result } => {
                if let Ok(bytes) = result {
                    let still_listed = self
                        .products
                        .as_ref()
                        .is_some_and(|list| list.contains(id));
                    if still_listed {
                        self.thumbnails.insert(id, image::Handle::from_bytes(bytes));
                    }
                }
                Effect::None
            }
        }
    }

    fn handle_products_loaded(&mut self, result: Result<Vec<Product>, ApiError>) -> Effect {
        self.loading = false;
        match result {
            Ok(_) if self.load_revision != self.revision => {
                // A create or delete finished after this listing was requested.
                tracing::debug!("discarding stale product listing");
                self.init()
            }
            Ok(products) => {
                let list = ProductList::from_remote(products);
                self.thumbnails.retain(|id, _| list.contains(*id));
                let fetches = self.thumbnail_requests(list.iter());
                self.products = Some(list);
                fetches
            }
            Err(err) => {
                // Listing failures stay out of the status line.
                tracing::warn!(error = %err, "could not load products");
                Effect::None
            }
        }
    }

    fn handle_submit(&mut self) -> Effect {
        if self.creating {
            tracing::debug!("create already in flight");
            return Effect::None;
        }
        let Some(payload) = self.draft.to_new_product() else {
            tracing::debug!("submit ignored: required fields missing");
            return Effect::None;
        };
        self.creating = true;
        Effect::CreateProduct(payload)
    }

    fn handle_product_created(&mut self, result: Result<Product, ApiError>) -> Effect {
        self.creating = false;
        match result {
            Ok(product) => {
                let fetches = self.thumbnail_requests(std::iter::once(&product));
                self.products
                    .get_or_insert_with(ProductList::new)
                    .upsert(product);
                self.revision += 1;
                self.status = Some(Status::Created);
                self.draft.clear();
                fetches
            }
            Err(err) => {
                self.status = Some(Status::CreateFailed(err));
                Effect::None
            }
        }
    }

    fn handle_product_deleted(
        &mut self,
        id: ProductId,
        result: Result<serde_json::Value, ApiError>,
    ) -> Effect {
        self.deleting.remove(&id);
        match result {
            Ok(_confirmation) => {
                if let Some(list) = self.products.as_mut() {
                    list.remove(id);
                }
                self.revision += 1;
                self.thumbnails.remove(&id);
                self.status = Some(Status::Deleted);
            }
            Err(err) => {
                self.status = Some(Status::DeleteFailed(err));
            }
        }
        Effect::None
    }

    fn thumbnail_requests<'a>(&self, products: impl Iterator<Item = &'a Product>) -> Effect {
        let requests: Vec<_> = products
            .filter_map(|product| {
                let url = product.image.as_ref()?.resolve(&self.image_base)?;
                Some((product.id, url))
            })
            .collect();

        if requests.is_empty() {
            Effect::None
        } else {
            Effect::FetchThumbnails(requests)
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current products, or `None` while no listing has succeeded.
    #[must_use]
    pub fn products(&self) -> Option<&ProductList> {
        self.products.as_ref()
    }

    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    #[must_use]
    pub fn draft_field(&self, field: DraftField) -> &str {
        self.draft.field(field)
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.creating
    }

    #[must_use]
    pub fn is_deleting(&self, id: ProductId) -> bool {
        self.deleting.contains(&id)
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.creating && self.draft.is_complete()
    }

    #[must_use]
    pub fn thumbnail(&self, id: ProductId) -> Option<&image::Handle> {
        self.thumbnails.get(&id)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - catalog types shared by the API client and the view.
//!
//! Apart from `serde` (wire format) and `url` (image reference resolution),
//! nothing here depends on the GUI or the HTTP transport.
//!
//! # Modules
//!
//! - [`product`]: Remote records ([`Product`](product::Product),
//!   [`ProductId`](product::ProductId), [`ImageRef`](product::ImageRef)) and the
//!   create payload ([`NewProduct`](product::NewProduct),
//!   [`ImageUpload`](product::ImageUpload))
//! - [`draft`]: Form state ([`ProductDraft`](draft::ProductDraft),
//!   [`DraftField`](draft::DraftField))
//! - [`list`]: Ordered, id-unique product collection ([`ProductList`](list::ProductList))

pub mod draft;
pub mod list;
pub mod product;

pub use draft::{DraftField, ProductDraft};
pub use list::ProductList;
pub use product::{ImageRef, ImageUpload, NewProduct, Product, ProductId, IMAGE_EXTENSIONS};

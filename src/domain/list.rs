// SPDX-License-Identifier: MPL-2.0
//! Ordered product collection keyed by identifier.

use super::product::{Product, ProductId};

/// Products in remote listing order, at most one entry per identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductList {
    items: Vec<Product>,
}

impl ProductList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from a remote listing. Later duplicates of an id are dropped.
    #[must_use]
    pub fn from_remote(products: Vec<Product>) -> Self {
        let mut list = Self::new();
        for product in products {
            if !list.contains(product.id) {
                list.items.push(product);
            }
        }
        list
    }

    /// Adds a product at the end, or replaces the entry that already has its id.
    pub fn upsert(&mut self, product: Product) {
        match self.items.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.items.push(product),
        }
    }

    /// Removes the entry with `id`, if any.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

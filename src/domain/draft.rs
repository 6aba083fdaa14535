// SPDX-License-Identifier: MPL-2.0
//! In-progress product held by the form.

use super::product::{ImageUpload, NewProduct};

/// Text fields of the draft that the form edits individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Price,
    Stock,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Price, DraftField::Stock];

    /// Returns the i18n key of the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            DraftField::Name => "catalog-field-name",
            DraftField::Price => "catalog-field-price",
            DraftField::Stock => "catalog-field-stock",
        }
    }
}

/// Unsubmitted product. It has no identifier until the server assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    name: String,
    price: String,
    stock: String,
    image: Option<ImageUpload>,
}

impl ProductDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Stock => &self.stock,
        }
    }

    /// Replaces one text field, leaving every other field untouched.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Price => &mut self.price,
            DraftField::Stock => &mut self.stock,
        };
        *slot = value;
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    /// Whether every required field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| !self.field(*field).is_empty())
            && self.image.is_some()
    }

    /// Builds the create payload, or `None` while a required field is missing.
    #[must_use]
    pub fn to_new_product(&self) -> Option<NewProduct> {
        if !self.is_complete() {
            return None;
        }
        let image = self.image.clone()?;
        Some(NewProduct {
            name: self.name.clone(),
            price: self.price.clone(),
            stock: self.stock.clone(),
            image,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.set_field(DraftField::Name, "Lapis".into());
        draft.set_field(DraftField::Price, "1.00".into());
        draft.set_field(DraftField::Stock, "5".into());
        draft.set_image(ImageUpload::new("lapis.png", vec![0x89, b'P']));
        draft
    }

    #[test]
    fn set_field_only_touches_named_field() {
        for target in DraftField::ALL {
            let before = filled();
            let mut after = before.clone();
            after.set_field(target, "changed".into());

            for other in DraftField::ALL {
                if other == target {
                    assert_eq!(after.field(other), "changed");
                } else {
                    assert_eq!(after.field(other), before.field(other));
                }
            }
            assert_eq!(after.image(), before.image());
        }
    }

    #[test]
    fn incomplete_draft_has_no_payload() {
        let mut draft = filled();
        draft.set_field(DraftField::Price, String::new());
        assert!(!draft.is_complete());
        assert!(draft.to_new_product().is_none());

        let mut no_image = ProductDraft::new();
        no_image.set_field(DraftField::Name, "Lapis".into());
        no_image.set_field(DraftField::Price, "1.00".into());
        no_image.set_field(DraftField::Stock, "5".into());
        assert!(no_image.to_new_product().is_none());
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let mut draft = filled();
        draft.set_field(DraftField::Name, " ".into());
        assert!(draft.is_complete());
        assert_eq!(draft.to_new_product().expect("payload").name, " ");
    }

    #[test]
    fn complete_draft_builds_payload() {
        let payload = filled().to_new_product().expect("payload");
        assert_eq!(payload.name, "Lapis");
        assert_eq!(payload.price, "1.00");
        assert_eq!(payload.stock, "5");
        assert_eq!(payload.image.file_name(), "lapis.png");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = filled();
        draft.clear();
        for field in DraftField::ALL {
            assert_eq!(draft.field(field), "");
        }
        assert!(draft.image().is_none());
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrine_catalog::{Product, Size};
use vitrine_core::ProductId;

/// Errors raised when turning detail-page state into a cart handoff.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DetailError {
    /// Add-to-cart requires a size choice first.
    #[error("no size selected")]
    SizeNotSelected,
}

/// Payload handed to the external cart collaborator.
///
/// Producing the intent is where this crate stops; the cart itself lives
/// upstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartIntent {
    pub product_id: ProductId,
    pub size: Size,
}

/// Immutable snapshot of the product-detail page state.
///
/// Opens with the first gallery image selected and no size chosen. All
/// transitions return a new value and leave the receiver untouched, so
/// callers can keep prior states for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductView<'a> {
    product: &'a Product,
    image_index: usize,
    size: Option<Size>,
}

impl<'a> ProductView<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            image_index: 0,
            size: None,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// URI of the selected gallery image.
    ///
    /// `None` only when the product has no images at all.
    pub fn image(&self) -> Option<&'a str> {
        self.product.images.get(self.image_index).map(String::as_str)
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Select a gallery image by index.
    ///
    /// An out-of-range index leaves the selection unchanged.
    #[must_use]
    pub fn select_image(&self, index: usize) -> Self {
        if index < self.product.images.len() {
            Self {
                image_index: index,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Select a size.
    ///
    /// A size the product does not offer leaves the selection unchanged.
    #[must_use]
    pub fn select_size(&self, size: Size) -> Self {
        if self.product.offers_size(size) {
            Self {
                size: Some(size),
                ..*self
            }
        } else {
            *self
        }
    }

    /// Produce the add-to-cart handoff for the current selection.
    pub fn cart_intent(&self) -> Result<CartIntent, DetailError> {
        let size = self.size.ok_or(DetailError::SizeNotSelected)?;
        Ok(CartIntent {
            product_id: self.product.id,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product() -> Product {
        Product {
            id: ProductId::new(),
            name: "Men's Shirt".to_string(),
            description: "A crisp cotton shirt.".to_string(),
            price: Some(3_000),
            category: "Men".to_string(),
            sub_category: "Topwear".to_string(),
            images: vec![
                "https://img.example/front.png".to_string(),
                "https://img.example/back.png".to_string(),
            ],
            sizes: vec![Size::S, Size::M, Size::L],
            listed_at: Utc::now(),
            bestseller: false,
        }
    }

    #[test]
    fn opens_with_first_image_and_no_size() {
        let p = product();
        let view = ProductView::new(&p);

        assert_eq!(view.image(), Some("https://img.example/front.png"));
        assert_eq!(view.size(), None);
    }

    #[test]
    fn select_image_switches_the_gallery() {
        let p = product();
        let view = ProductView::new(&p).select_image(1);

        assert_eq!(view.image(), Some("https://img.example/back.png"));
    }

    #[test]
    fn out_of_range_image_index_is_ignored() {
        let p = product();
        let view = ProductView::new(&p).select_image(1).select_image(9);

        assert_eq!(view.image(), Some("https://img.example/back.png"));
    }

    #[test]
    fn imageless_product_has_no_selected_image() {
        let mut p = product();
        p.images.clear();
        let view = ProductView::new(&p);

        assert_eq!(view.image(), None);
    }

    #[test]
    fn select_size_accepts_offered_sizes_only() {
        let p = product();
        let view = ProductView::new(&p).select_size(Size::M);
        assert_eq!(view.size(), Some(Size::M));

        let unchanged = view.select_size(Size::Xxl);
        assert_eq!(unchanged.size(), Some(Size::M));
    }

    #[test]
    fn transitions_never_mutate_the_receiver() {
        let p = product();
        let opened = ProductView::new(&p);
        let _changed = opened.select_image(1).select_size(Size::L);

        assert_eq!(opened.image(), Some("https://img.example/front.png"));
        assert_eq!(opened.size(), None);
    }

    #[test]
    fn cart_intent_requires_a_size() {
        let p = product();
        let view = ProductView::new(&p);

        assert_eq!(view.cart_intent(), Err(DetailError::SizeNotSelected));

        let intent = view.select_size(Size::M).cart_intent().unwrap();
        assert_eq!(intent.product_id, p.id);
        assert_eq!(intent.size, Size::M);
    }

    #[test]
    fn cart_intent_serializes_for_the_cart_collaborator() {
        let p = product();
        let intent = ProductView::new(&p).select_size(Size::S).cart_intent().unwrap();

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["size"], "S");
        assert_eq!(json["product_id"], p.id.to_string());
    }
}

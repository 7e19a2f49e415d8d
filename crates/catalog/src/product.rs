use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult, ProductId};

/// Garment size a product can be offered in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable catalog product record.
///
/// Owned by the catalog provider; the engine and view-state crates only
/// ever borrow it. Field names on the wire follow the upstream feed
/// (camelCase, `date` as epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in the smallest currency unit (e.g. cents).
    ///
    /// `None` means the product is listed without a price; price sorts rank
    /// it lowest rather than failing.
    #[serde(default)]
    pub price: Option<u64>,
    pub category: String,
    pub sub_category: String,
    /// Ordered gallery image URIs. The first entry is the gallery default.
    #[serde(default)]
    pub images: Vec<String>,
    /// Sizes the product is offered in.
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(rename = "date", with = "chrono::serde::ts_milliseconds")]
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub bestseller: bool,
}

impl Product {
    /// Check the fields the storefront relies on.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        Ok(())
    }

    pub fn offers_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            description: String::new(),
            price: Some(2_500),
            category: category.to_string(),
            sub_category: "Topwear".to_string(),
            images: Vec::new(),
            sizes: vec![Size::S, Size::M],
            listed_at: Utc::now(),
            bestseller: false,
        }
    }

    #[test]
    fn validate_accepts_well_formed_product() {
        assert!(product("Round Neck Tee", "Men").validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = product("   ", "Men").validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_category() {
        let err = product("Round Neck Tee", "").validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn offers_size_checks_listed_sizes_only() {
        let p = product("Round Neck Tee", "Men");
        assert!(p.offers_size(Size::M));
        assert!(!p.offers_size(Size::Xxl));
    }

    #[test]
    fn size_serializes_as_uppercase_label() {
        assert_eq!(serde_json::to_string(&Size::Xl).unwrap(), "\"XL\"");
        assert_eq!(serde_json::from_str::<Size>("\"XXL\"").unwrap(), Size::Xxl);
        assert_eq!(Size::Xs.to_string(), "XS");
    }
}

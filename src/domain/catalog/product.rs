//! Product catalog entries.

use crate::domain::foundation::{ItemCode, ValidationError};

const PRODUCT_NAME_MAX: usize = 100;

/// A retail product (towels, bottles, ...), keyed by item code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub item_code: ItemCode,
    pub sale_price: i64,
    pub name: String,
    pub image: Option<Vec<u8>>,
}

impl Product {
    pub fn new(
        item_code: ItemCode,
        sale_price: i64,
        name: impl Into<String>,
        image: Option<Vec<u8>>,
    ) -> Result<Self, ValidationError> {
        if sale_price <= 0 {
            return Err(ValidationError::not_positive("sale_price", sale_price));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > PRODUCT_NAME_MAX {
            return Err(ValidationError::too_long("name", PRODUCT_NAME_MAX));
        }
        Ok(Self {
            item_code,
            sale_price,
            name,
            image,
        })
    }
}

/// Partial update for products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub sale_price: Option<i64>,
    pub name: Option<String>,
    pub image: Option<Vec<u8>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.sale_price.is_none() && self.name.is_none() && self.image.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(price) = self.sale_price {
            if price <= 0 {
                return Err(ValidationError::not_positive("sale_price", price));
            }
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
            if name.len() > PRODUCT_NAME_MAX {
                return Err(ValidationError::too_long("name", PRODUCT_NAME_MAX));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> ItemCode {
        ItemCode::new("P001").unwrap()
    }

    #[test]
    fn new_product_accepts_valid_fields() {
        let product = Product::new(code(), 500, "Sports towel", None).unwrap();
        assert_eq!(product.sale_price, 500);
        assert!(product.image.is_none());
    }

    #[test]
    fn new_product_rejects_non_positive_price() {
        assert!(Product::new(code(), 0, "Sports towel", None).is_err());
        assert!(Product::new(code(), -10, "Sports towel", None).is_err());
    }

    #[test]
    fn new_product_rejects_blank_name() {
        assert!(Product::new(code(), 500, "", None).is_err());
    }

    #[test]
    fn patch_validates_supplied_fields() {
        let patch = ProductPatch {
            sale_price: Some(800),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = ProductPatch {
            sale_price: Some(0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            image: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}

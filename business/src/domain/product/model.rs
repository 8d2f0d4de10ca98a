use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::Serialize;

use super::errors::ProductError;
use super::value_objects::{ProductCategory, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub category: ProductCategory,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub category: ProductCategory,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < BigDecimal::zero() {
            return Err(ProductError::NegativePrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            category: props.category,
        })
    }

    /// Constructor for records already validated by the catalog (no validation).
    pub fn from_catalog(
        id: ProductId,
        name: String,
        price: BigDecimal,
        category: ProductCategory,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category,
        }
    }

    pub fn is_redeemable(&self) -> bool {
        self.category.is_redeemable()
    }
}

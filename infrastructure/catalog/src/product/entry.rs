use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer};

use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{ProductCategory, ProductId};

use crate::source::CatalogError;

/// Raw product record as stored in a catalog file.
///
/// Prices are decimal strings; JSON numbers would go through `f64`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: i32,
    pub name: String,
    #[serde(deserialize_with = "price_from_text")]
    pub price: BigDecimal,
    pub category: i32,
}

fn price_from_text<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    BigDecimal::from_str(text.trim()).map_err(serde::de::Error::custom)
}

impl CatalogEntry {
    pub fn into_domain(self) -> Result<Product, CatalogError> {
        let category =
            ProductCategory::from_code(self.category).ok_or(CatalogError::UnknownCategory {
                id: self.id,
                code: self.category,
            })?;

        let product = Product::new(NewProductProps {
            id: ProductId::new(self.id),
            name: self.name,
            price: self.price,
            category,
        })?;

        Ok(product)
    }
}

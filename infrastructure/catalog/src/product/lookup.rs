use std::collections::HashMap;

use business::domain::product::errors::ProductError;
use business::domain::product::lookup::ProductLookup;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

use super::entry::CatalogEntry;
use crate::source::CatalogError;

/// Product catalog held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: HashMap<ProductId, Product>,
}

impl InMemoryProductCatalog {
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut products = HashMap::new();

        for entry in entries {
            let product = entry.into_domain()?;
            if products.contains_key(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            products.insert(product.id, product);
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for InMemoryProductCatalog {
    fn get(&self, id: ProductId) -> Result<Product, ProductError> {
        match self.products.get(&id) {
            Some(product) => Ok(product.clone()),
            None => {
                tracing::debug!(product_id = %id, "product missing from catalog");
                Err(ProductError::NotFound(id))
            }
        }
    }
}

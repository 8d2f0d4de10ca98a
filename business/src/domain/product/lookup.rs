use super::errors::ProductError;
use super::model::Product;
use super::value_objects::ProductId;

/// Port resolving product ids to products.
///
/// Implementations return `ProductError::NotFound` when the id is unknown.
pub trait ProductLookup: Send + Sync {
    fn get(&self, id: ProductId) -> Result<Product, ProductError>;
}

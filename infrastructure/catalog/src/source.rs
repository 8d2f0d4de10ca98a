use std::fs;
use std::path::PathBuf;

use business::domain::product::errors::ProductError;
use business::domain::product::value_objects::ProductId;
use thiserror::Error;

use crate::product::entry::CatalogEntry;
use crate::product::lookup::InMemoryProductCatalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.io_error")]
    Io(#[from] std::io::Error),
    #[error("catalog.parse_error")]
    Parse(#[from] serde_json::Error),
    #[error("catalog.unknown_category")]
    UnknownCategory { id: i32, code: i32 },
    #[error("catalog.duplicate_product")]
    DuplicateProduct(ProductId),
    #[error("catalog.invalid_product")]
    InvalidProduct(#[from] ProductError),
}

/// Location of a JSON catalog file
#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub path: PathBuf,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Loads the catalog file into memory
///
/// The file holds a JSON array of `{id, name, price, category}` records.
pub fn load_catalog(source: &CatalogSource) -> Result<InMemoryProductCatalog, CatalogError> {
    let text = fs::read_to_string(&source.path)?;
    let catalog = parse_catalog(&text)?;

    tracing::info!(
        path = %source.path.display(),
        products = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn parse_catalog(text: &str) -> Result<InMemoryProductCatalog, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(text)?;
    InMemoryProductCatalog::from_entries(entries)
}

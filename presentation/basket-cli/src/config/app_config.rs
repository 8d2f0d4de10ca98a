use std::env;
use std::path::PathBuf;

use catalog::source::CatalogSource;

const DEFAULT_CATALOG_PATH: &str = "catalog.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogSource,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_PATH: JSON product catalog (default: "catalog.json")
    pub fn from_env() -> Self {
        Self::from_catalog_path(env::var("CATALOG_PATH").ok())
    }

    fn from_catalog_path(path: Option<String>) -> Self {
        let path = path.unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
        Self {
            catalog: CatalogSource::new(path),
        }
    }

    pub fn with_catalog_override(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self {
                catalog: CatalogSource::new(path),
            },
            None => self,
        }
    }
}

// src/search/store.rs

use crate::catalog::{CatalogError, CatalogService};
use crate::domain::Property;

/// The full, unfiltered catalog. Fetched once when the browser mounts.
#[derive(Debug, Default)]
pub struct ListingStore {
    catalog: Vec<Property>,
    loaded: bool,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the catalog. On failure the store stays empty and the error is
    /// handed back for the caller to surface.
    pub fn mount(&mut self, service: &dyn CatalogService) -> Result<usize, CatalogError> {
        let catalog = service.fetch_all()?;
        self.replace(catalog);
        Ok(self.catalog.len())
    }

    pub fn replace(&mut self, catalog: Vec<Property>) {
        self.catalog = catalog;
        self.loaded = true;
    }

    pub fn all(&self) -> &[Property] {
        &self.catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

mod catalog_error;
mod client;

pub use catalog_error::CatalogError;
pub use client::HttpCatalogClient;

use crate::domain::{FilterQuery, Property};

/// The remote listing service. Consumed, never implemented, by the browser;
/// the trait exists so tests can stand in for the network.
pub trait CatalogService: Send + Sync {
    /// `GET /properties`: the full catalog.
    fn fetch_all(&self) -> Result<Vec<Property>, CatalogError>;

    /// `GET /properties/filter`: listings matching every present constraint.
    fn fetch_filtered(&self, query: &FilterQuery) -> Result<Vec<Property>, CatalogError>;
}

use thiserror::Error;

/// Transport failures talking to the catalog service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Catalog service returned HTTP {0}")]
    Status(u16),
    #[error("Could not decode catalog response: {0}")]
    Decode(String),
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

// client.rs
use crate::catalog::{CatalogError, CatalogService};
use crate::domain::{FilterQuery, Property};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("listing-browser/", env!("CARGO_PKG_VERSION"));

const PROPERTIES_PATH: &str = "properties";
const FILTER_PATH: &str = "properties/filter";

/// Blocking HTTP client for the remote catalog.
/// Requests carry no client-side timeout: they complete or fail on their own.
pub struct HttpCatalogClient {
    client: Client,
    properties_url: Url,
    filter_url: Url,
}

impl HttpCatalogClient {
    pub fn new(base_url: &Url) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        let properties_url = base_url
            .join(PROPERTIES_PATH)
            .map_err(|e| CatalogError::Client(e.to_string()))?;
        let filter_url = base_url
            .join(FILTER_PATH)
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            client,
            properties_url,
            filter_url,
        })
    }

    pub fn properties_url(&self) -> &Url {
        &self.properties_url
    }

    /// Filter URL with only the present constraints encoded.
    pub fn filter_url(&self, query: &FilterQuery) -> Url {
        let mut url = self.filter_url.clone();
        let params = query.to_params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    fn get_properties(&self, url: Url) -> Result<Vec<Property>, CatalogError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Self::decode(resp)
    }

    fn decode(resp: Response) -> Result<Vec<Property>, CatalogError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

impl CatalogService for HttpCatalogClient {
    fn fetch_all(&self) -> Result<Vec<Property>, CatalogError> {
        tracing::debug!(url = %self.properties_url, "fetching catalog");
        self.get_properties(self.properties_url.clone())
    }

    fn fetch_filtered(&self, query: &FilterQuery) -> Result<Vec<Property>, CatalogError> {
        let url = self.filter_url(query);
        tracing::debug!(url = %url, "fetching filtered listings");
        self.get_properties(url)
    }
}

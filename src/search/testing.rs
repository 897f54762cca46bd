// Test doubles for the remote catalog.

use crate::catalog::{CatalogError, CatalogService};
use crate::domain::{FilterQuery, Property};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// In-memory catalog service that applies the remote filter semantics:
/// exact match on bedrooms, bathrooms, state and city, range match on price.
pub struct FakeCatalog {
    catalog: Result<Vec<Property>, CatalogError>,
    overrides: Mutex<HashMap<String, Result<Vec<Property>, CatalogError>>>,
    gates: Mutex<HashMap<String, Receiver<()>>>,
    requests: Mutex<Vec<FilterQuery>>,
}

impl FakeCatalog {
    pub fn with_catalog(catalog: Vec<Property>) -> Self {
        Self {
            catalog: Ok(catalog),
            overrides: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            catalog: Err(CatalogError::Network("connection refused".into())),
            ..Self::with_catalog(Vec::new())
        }
    }

    /// Fixes the response for filter requests naming `city`.
    pub fn respond(self, city: &str, response: Result<Vec<Property>, CatalogError>) -> Self {
        self.overrides.lock().unwrap().insert(city.to_string(), response);
        self
    }

    /// Holds filter requests naming `city` until the returned sender fires.
    pub fn gate(&self, city: &str) -> Sender<()> {
        let (tx, rx) = mpsc::channel();
        self.gates.lock().unwrap().insert(city.to_string(), rx);
        tx
    }

    pub fn filter_requests(&self) -> Vec<FilterQuery> {
        self.requests.lock().unwrap().clone()
    }

    fn server_filter(catalog: &[Property], q: &FilterQuery) -> Vec<Property> {
        catalog
            .iter()
            .filter(|p| q.bedrooms.map_or(true, |n| p.bedrooms == f64::from(n)))
            .filter(|p| q.bathrooms.map_or(true, |n| p.bathrooms == f64::from(n)))
            .filter(|p| q.state.as_ref().map_or(true, |s| &p.state == s))
            .filter(|p| q.city.as_ref().map_or(true, |c| &p.city == c))
            .filter(|p| q.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| q.max_price.map_or(true, |max| p.price <= max))
            .cloned()
            .collect()
    }
}

impl CatalogService for FakeCatalog {
    fn fetch_all(&self) -> Result<Vec<Property>, CatalogError> {
        self.catalog.clone()
    }

    fn fetch_filtered(&self, query: &FilterQuery) -> Result<Vec<Property>, CatalogError> {
        self.requests.lock().unwrap().push(query.clone());

        let city = query.city.clone().unwrap_or_default();
        let gate = self.gates.lock().unwrap().remove(&city);
        if let Some(gate) = gate {
            let _ = gate.recv();
        }

        if let Some(response) = self.overrides.lock().unwrap().get(&city) {
            return response.clone();
        }

        self.catalog
            .as_ref()
            .map(|catalog| Self::server_filter(catalog, query))
            .map_err(Clone::clone)
    }
}

// src/search/matcher.rs

use crate::domain::Property;

/// Lowercases a raw query the way both typed and spoken searches are stored.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// True when title, description, or city contains `query`.
/// `query` must already be lowercased.
pub fn matches(property: &Property, query: &str) -> bool {
    [&property.title, &property.description, &property.city]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

/// Local substring search over an already-fetched catalog.
/// An empty query is no constraint and returns the whole catalog.
pub fn filter_catalog(catalog: &[Property], raw_query: &str) -> Vec<Property> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|p| matches(p, &query))
        .cloned()
        .collect()
}

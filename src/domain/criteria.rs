// src/domain/criteria.rs

use std::fmt;

/// One structured filter input. The wire name doubles as the form field
/// name and as the key of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Bedrooms,
    Bathrooms,
    State,
    City,
    MinPrice,
    MaxPrice,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Bedrooms,
        FilterField::Bathrooms,
        FilterField::State,
        FilterField::City,
        FilterField::MinPrice,
        FilterField::MaxPrice,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            FilterField::Bedrooms => "bedrooms",
            FilterField::Bathrooms => "bathrooms",
            FilterField::State => "state",
            FilterField::City => "city",
            FilterField::MinPrice => "minPrice",
            FilterField::MaxPrice => "maxPrice",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Bedrooms => "Bedrooms",
            FilterField::Bathrooms => "Bathrooms",
            FilterField::State => "State",
            FilterField::City => "City",
            FilterField::MinPrice => "Min Price",
            FilterField::MaxPrice => "Max Price",
        }
    }

    /// Fixed choices offered by the select inputs. Free-text fields have none.
    pub fn choices(self) -> &'static [u32] {
        match self {
            FilterField::Bedrooms => &[1, 2, 3, 4],
            FilterField::Bathrooms => &[1, 2, 3],
            _ => &[],
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Which filter inputs a page offers. The all-properties page gets the full
/// set; other pages only filter by city and price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterProfile {
    #[default]
    Full,
    Compact,
}

impl FilterProfile {
    pub fn fields(self) -> &'static [FilterField] {
        match self {
            FilterProfile::Full => &FilterField::ALL,
            FilterProfile::Compact => &[
                FilterField::City,
                FilterField::MinPrice,
                FilterField::MaxPrice,
            ],
        }
    }

    pub fn offers(self, field: FilterField) -> bool {
        self.fields().contains(&field)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full" => Some(FilterProfile::Full),
            "compact" => Some(FilterProfile::Compact),
            _ => None,
        }
    }
}

/// Raw structured-filter input exactly as the user typed it.
/// `None` means the field is unconstrained; blank input counts as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl FilterCriteria {
    pub fn set(&mut self, field: FilterField, raw: &str) {
        let trimmed = raw.trim();
        let value = (!trimmed.is_empty()).then(|| trimmed.to_string());
        *self.slot_mut(field) = value;
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Bedrooms => self.bedrooms.as_deref(),
            FilterField::Bathrooms => self.bathrooms.as_deref(),
            FilterField::State => self.state.as_deref(),
            FilterField::City => self.city.as_deref(),
            FilterField::MinPrice => self.min_price.as_deref(),
            FilterField::MaxPrice => self.max_price.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Bedrooms => &mut self.bedrooms,
            FilterField::Bathrooms => &mut self.bathrooms,
            FilterField::State => &mut self.state,
            FilterField::City => &mut self.city,
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
        }
    }

    /// Builds criteria from submitted form pairs. Unknown names and fields the
    /// profile does not offer are ignored.
    pub fn from_pairs<I, K, V>(profile: FilterProfile, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = FilterCriteria::default();
        for (name, value) in pairs {
            if let Some(field) = FilterField::from_wire(name.as_ref()) {
                if profile.offers(field) {
                    criteria.set(field, value.as_ref());
                }
            }
        }
        criteria
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Parses a price-like input. Only finite numbers count as numeric.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Normalized query sent to the remote filter endpoint. Every field that is
/// `None` is left off the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterQuery {
    /// Drops any value that is not well-formed, even if validation already
    /// rejected it, so nothing malformed is ever sent upstream.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            bedrooms: criteria.bedrooms.as_deref().and_then(parse_count),
            bathrooms: criteria.bathrooms.as_deref().and_then(parse_count),
            state: criteria.state.clone(),
            city: criteria.city.clone(),
            min_price: criteria.min_price.as_deref().and_then(parse_number),
            max_price: criteria.max_price.as_deref().and_then(parse_number),
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(n) = self.bedrooms {
            params.push((FilterField::Bedrooms.wire_name(), n.to_string()));
        }
        if let Some(n) = self.bathrooms {
            params.push((FilterField::Bathrooms.wire_name(), n.to_string()));
        }
        if let Some(s) = &self.state {
            params.push((FilterField::State.wire_name(), s.clone()));
        }
        if let Some(c) = &self.city {
            params.push((FilterField::City.wire_name(), c.clone()));
        }
        if let Some(p) = self.min_price {
            params.push((FilterField::MinPrice.wire_name(), p.to_string()));
        }
        if let Some(p) = self.max_price {
            params.push((FilterField::MaxPrice.wire_name(), p.to_string()));
        }
        params
    }
}

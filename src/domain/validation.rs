// src/domain/validation.rs

use crate::domain::criteria::{parse_number, FilterCriteria, FilterField};
use std::collections::BTreeMap;

pub const MIN_PRICE_INVALID: &str =
    "Please enter a valid minimum price (greater than or equal to 0).";
pub const MAX_PRICE_INVALID: &str =
    "Please enter a valid maximum price (greater than or equal to 0).";
pub const MAX_BELOW_MIN: &str = "Maximum price should be greater than or equal to minimum price.";

/// Field name -> message. Empty means the criteria are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FilterField, String>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Later rules overwrite earlier messages for the same field.
    fn insert(&mut self, field: FilterField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Runs every price rule against the criteria. Rules do not short-circuit;
/// the result is rebuilt from scratch on each call.
pub fn validate(criteria: &FilterCriteria) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let min = criteria.min_price.as_deref().map(parse_number);
    let max = criteria.max_price.as_deref().map(parse_number);

    if let Some(parsed) = min {
        if !parsed.is_some_and(|n| n >= 0.0) {
            errors.insert(FilterField::MinPrice, MIN_PRICE_INVALID);
        }
    }

    if let Some(parsed) = max {
        if !parsed.is_some_and(|n| n >= 0.0) {
            errors.insert(FilterField::MaxPrice, MAX_PRICE_INVALID);
        }
    }

    if let (Some(Some(min)), Some(Some(max))) = (min, max) {
        if max < min {
            errors.insert(FilterField::MaxPrice, MAX_BELOW_MIN);
        }
    }

    errors
}

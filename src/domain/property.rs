// src/domain/property.rs

use serde::Deserialize;

/// A listing as served by the remote catalog service.
/// The browser only ever holds read-only copies; the service owns the record.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Property {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub city: String,
    pub state: String,
    pub price: f64,
    // The service stores counts as plain numbers, so half baths are legal.
    pub bedrooms: f64,
    pub bathrooms: f64,

    // Display-only fields, not used for filtering
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    pub image: Option<String>,
    #[serde(default, alias = "squareFeet", alias = "square_feet")]
    pub square_feet: Option<f64>,
}

impl Property {
    /// "City, State" line used by the card renderer.
    pub fn location_line(&self) -> String {
        match (self.city.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.state),
            (false, true) => self.city.clone(),
            (true, false) => self.state.clone(),
            (true, true) => String::new(),
        }
    }

    /// Whole-dollar price with thousands separators, e.g. "$1,250,000".
    pub fn price_label(&self) -> String {
        let whole = self.price.max(0.0).round() as u64;
        let digits = whole.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        format!("${out}")
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, title: &str, description: &str, city: &str) -> Property {
    Property {
        id,
        title: title.to_string(),
        description: description.to_string(),
        city: city.to_string(),
        state: "NV".to_string(),
        price: 250_000.0,
        bedrooms: 2.0,
        bathrooms: 1.0,
        address: None,
        image: None,
        square_feet: None,
    }
}

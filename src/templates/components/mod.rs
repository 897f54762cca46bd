use crate::domain::{FilterField, Property, ValidationErrors};
use crate::search::Notice;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

/// Summary card for one listing.
pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="property-card" data-id=(property.id) {
            @if let Some(src) = &property.image {
                img class="property-card__image" src=(src) alt=(property.title) loading="lazy";
            }
            div class="property-card__body" {
                h2 { (property.title) }
                p class="property-card__location" { (property.location_line()) }
                p class="property-card__price" { (property.price_label()) }
                p class="property-card__rooms" {
                    (property.bedrooms) " bd · " (property.bathrooms) " ba"
                    @if let Some(sqft) = property.square_feet {
                        " · " (sqft) " sqft"
                    }
                }
                @if !property.description.is_empty() {
                    p class="property-card__description" { (property.description) }
                }
            }
        }
    }
}

pub fn no_results() -> Markup {
    html! {
        p class="no-results" role="status" { "No Products Found!" }
    }
}

/// Inline message for one filter input, if it has one.
pub fn field_error(errors: &ValidationErrors, field: FilterField) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            span class="error" data-field=(field.wire_name()) { (message) }
        }
    }
}

pub fn notice_list(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div class="notices" role="alert" {
                @for notice in notices {
                    p class="notice" { (notice.message()) }
                }
            }
        }
    }
}

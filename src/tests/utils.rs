use crate::domain::{FilterProfile, Property};
use crate::router::handle;
use crate::search::testing::FakeCatalog;
use crate::search::{ListingBrowser, SharedBrowser};
use crate::voice::SpeechRecognizer;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;

pub fn listing(id: i64, title: &str, city: &str, state: &str, price: f64, bedrooms: u32) -> Property {
    Property {
        id,
        title: title.to_string(),
        description: format!("{title} in {city}"),
        city: city.to_string(),
        state: state.to_string(),
        price,
        bedrooms: f64::from(bedrooms),
        bathrooms: 1.0,
        address: None,
        image: None,
        square_feet: None,
    }
}

pub fn catalog() -> Vec<Property> {
    vec![
        listing(1, "Lake House", "Reno", "Nevada", 525_000.0, 3),
        listing(2, "City Loft", "Austin", "Texas", 410_000.0, 1),
    ]
}

/// Mounted browser over a fake catalog service.
pub fn init_test_browser(
    service: FakeCatalog,
    profile: FilterProfile,
    speech: Arc<dyn SpeechRecognizer>,
) -> (SharedBrowser, Arc<FakeCatalog>) {
    let service = Arc::new(service);
    let browser = SharedBrowser::new(ListingBrowser::new(profile), service.clone(), speech);
    browser.mount();
    (browser, service)
}

pub fn request(browser: &SharedBrowser, method: Method, uri: &str) -> (u16, String, Response) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = match handle(req, browser) {
        Ok(resp) => resp,
        Err(err) => crate::responses::html_error_response(err),
    };
    let status = resp.status().as_u16();
    let (parts, mut body) = resp.into_parts();

    let mut text = String::new();
    body.reader().read_to_string(&mut text).unwrap();

    (status, text, Response::from_parts(parts, Body::empty()))
}

/// Ids of the rendered property cards, in page order.
pub fn card_ids(body: &str) -> Vec<i64> {
    body.match_indices("data-id=\"")
        .filter_map(|(i, m)| {
            let rest = &body[i + m.len()..];
            rest.split('"').next()?.parse().ok()
        })
        .collect()
}

// src/tests/router_tests/filter_tests.rs

use crate::catalog::CatalogError;
use crate::domain::FilterProfile;
use crate::search::testing::FakeCatalog;
use crate::tests::utils::{card_ids, catalog, init_test_browser, request};
use crate::voice::UnavailableRecognizer;
use http::Method;
use std::sync::Arc;

#[test]
fn structured_search_sends_only_present_fields() {
    let (browser, service) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (status, body, _) = request(
        &browser,
        Method::GET,
        "/filter?bedrooms=3&bathrooms=&state=&city=Reno&minPrice=&maxPrice=600000",
    );

    assert_eq!(status, 200);
    assert_eq!(card_ids(&body), vec![1]);

    let sent = service.filter_requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].to_params(),
        vec![
            ("bedrooms", "3".to_string()),
            ("city", "Reno".to_string()),
            ("maxPrice", "600000".to_string()),
        ]
    );
}

#[test]
fn inverted_price_range_renders_error_without_request() {
    let (browser, service) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (status, body, _) = request(
        &browser,
        Method::GET,
        "/filter?minPrice=500000&maxPrice=100000",
    );

    assert_eq!(status, 200);
    assert!(body.contains(r#"data-field="maxPrice""#));
    assert!(body.contains("Maximum price should be greater than or equal to minimum price."));
    assert!(service.filter_requests().is_empty());
    // The view is untouched: still the full catalog.
    assert_eq!(card_ids(&body), vec![1, 2]);
}

#[test]
fn malformed_filter_input_is_reported_inline_not_rejected() {
    let (browser, service) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (status, body, _) = request(&browser, Method::GET, "/filter?minPrice=abc&color=blue");

    assert_eq!(status, 200);
    assert!(body.contains(r#"data-field="minPrice""#));
    assert!(body.contains("Please enter a valid minimum price"));
    assert!(service.filter_requests().is_empty());
}

#[test]
fn half_bath_listing_is_shown_but_not_matched_by_whole_count() {
    let mut listings = catalog();
    listings[1].bathrooms = 1.5;
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(listings),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (_, page, _) = request(&browser, Method::GET, "/");
    assert_eq!(card_ids(&page), vec![1, 2]);
    assert!(page.contains("1.5 ba"));

    let (_, body, _) = request(&browser, Method::GET, "/filter?bathrooms=1");
    assert_eq!(card_ids(&body), vec![1]);
}

#[test]
fn empty_structured_result_shows_no_results() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()).respond("Austin", Ok(Vec::new())),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (_, body, _) = request(&browser, Method::GET, "/filter?city=Austin");

    assert!(body.contains("No Products Found!"));
    assert!(card_ids(&body).is_empty());
    browser.with(|b| assert!(b.reconciler().explicit_search_ran()));
}

#[test]
fn failed_structured_search_keeps_view_and_notifies() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()).respond("Reno", Err(CatalogError::Status(503))),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );
    request(&browser, Method::GET, "/search?q=loft");

    let (_, body, _) = request(&browser, Method::GET, "/filter?city=Reno");

    assert!(body.contains("Failed to fetch properties."));
    assert_eq!(card_ids(&body), vec![2]);
}

#[test]
fn compact_profile_renders_and_accepts_only_city_and_price() {
    let (browser, service) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Compact,
        Arc::new(UnavailableRecognizer),
    );

    let (_, body, _) = request(&browser, Method::GET, "/filter?bedrooms=3&city=Austin");

    assert!(!body.contains(r#"name="bedrooms""#));
    assert!(body.contains(r#"name="city""#));
    assert_eq!(card_ids(&body), vec![2]);
    assert_eq!(service.filter_requests()[0].bedrooms, None);
}

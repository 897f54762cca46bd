// src/tests/router_tests/browse_tests.rs

use crate::domain::FilterProfile;
use crate::search::testing::FakeCatalog;
use crate::tests::utils::{card_ids, catalog, init_test_browser, request};
use crate::voice::UnavailableRecognizer;
use http::Method;
use std::sync::Arc;

#[test]
fn home_shows_full_catalog() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (status, body, _) = request(&browser, Method::GET, "/");

    assert_eq!(status, 200);
    assert_eq!(card_ids(&body), vec![1, 2]);
    assert!(body.contains("Lake House"));
    assert!(!body.contains("No Products Found!"));
}

#[test]
fn text_search_filters_locally_and_echoes_query() {
    let (browser, service) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (status, body, _) = request(&browser, Method::GET, "/search?q=LAKE");

    assert_eq!(status, 200);
    assert_eq!(card_ids(&body), vec![1]);
    assert!(body.contains(r#"value="lake""#));
    assert!(service.filter_requests().is_empty());
}

#[test]
fn text_search_with_no_match_falls_back_to_catalog() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (_, body, _) = request(&browser, Method::GET, "/search?q=castle");

    assert_eq!(card_ids(&body), vec![1, 2]);
    assert!(!body.contains("No Products Found!"));
}

#[test]
fn catalog_failure_shows_notice_once() {
    let (browser, _) = init_test_browser(
        FakeCatalog::failing(),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (_, first, _) = request(&browser, Method::GET, "/");
    let (_, second, _) = request(&browser, Method::GET, "/");

    assert!(first.contains("Failed to fetch properties."));
    assert!(!second.contains("Failed to fetch properties."));
    assert!(card_ids(&first).is_empty());
}

#[test]
fn unknown_route_is_404() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (status, body, _) = request(&browser, Method::GET, "/admin");

    assert_eq!(status, 404);
    assert!(body.contains("Error 404"));
}

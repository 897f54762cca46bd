// src/tests/router_tests/voice_tests.rs

use crate::domain::FilterProfile;
use crate::search::testing::FakeCatalog;
use crate::tests::utils::{card_ids, catalog, init_test_browser, request};
use crate::voice::testing::ScriptedRecognizer;
use crate::voice::UnavailableRecognizer;
use http::Method;
use std::sync::Arc;

#[test]
fn voice_search_redirects_and_filters_by_transcript() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(ScriptedRecognizer::saying("City Loft")),
    );

    let (status, _, resp) = request(&browser, Method::POST, "/voice");
    assert_eq!(status, 303);
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");

    let (_, body, _) = request(&browser, Method::GET, "/");
    assert_eq!(card_ids(&body), vec![2]);
    assert!(body.contains(r#"value="city loft""#));
    assert!(!body.contains("Listening…"));
}

#[test]
fn unavailable_voice_button_still_posts_and_raises_notice() {
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        Arc::new(UnavailableRecognizer),
    );

    let (_, page, _) = request(&browser, Method::GET, "/");
    assert!(page.contains(r#"data-voice="unavailable""#));
    assert!(!page.contains("disabled"));

    let (status, _, _) = request(&browser, Method::POST, "/voice");
    assert_eq!(status, 303);

    let (_, body, _) = request(&browser, Method::GET, "/");
    assert!(body.contains(
        r#"<p class="notice">Speech recognition is not supported in this environment.</p>"#
    ));
    assert_eq!(card_ids(&body), vec![1, 2]);
}

#[test]
fn stop_redirects_home() {
    let speech = Arc::new(ScriptedRecognizer::saying("lake"));
    let (browser, _) = init_test_browser(
        FakeCatalog::with_catalog(catalog()),
        FilterProfile::Full,
        speech.clone(),
    );

    let (status, _, _) = request(&browser, Method::POST, "/voice/stop");

    assert_eq!(status, 303);
    assert_eq!(*speech.stops.lock().unwrap(), 1);
}

// src/tests/router_tests/property_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_with_cookie, test_catalog};
use astra::Response;
use base64::Engine;

/// Pulls the recently-viewed ids back out of the Set-Cookie header.
fn recent_ids(resp: &Response) -> Vec<String> {
    let cookie = resp
        .headers()
        .get("set-cookie")
        .expect("view should set the recently-viewed cookie")
        .to_str()
        .unwrap();
    let payload = cookie
        .strip_prefix("last_viewed=")
        .and_then(|rest| rest.split(';').next())
        .expect("cookie should carry the list payload");
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn cookie_for(ids: &[&str]) -> String {
    let json = serde_json::to_vec(ids).unwrap();
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);
    format!("last_viewed={payload}")
}

#[test]
fn unknown_id_is_not_found() {
    let catalog = test_catalog();
    let result = handle(get("/property/does-not-exist"), &catalog);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn detail_page_renders_and_records_the_view() {
    let catalog = test_catalog();
    let resp = handle(get("/property/f1"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(recent_ids(&resp), vec!["f1"]);

    let body = body_string(resp);
    assert!(body.contains("Koramangala Corner Flat"));
    assert!(body.contains("₹30,000"));
}

#[test]
fn repeat_views_deduplicate_most_recent_first() {
    let catalog = test_catalog();

    // Viewed f1 and f2 already (f2 most recent); viewing f1 again moves it
    // back to the front instead of duplicating it.
    let resp = handle(
        get_with_cookie("/property/f1", &cookie_for(&["f2", "f1"])),
        &catalog,
    )
    .unwrap();
    assert_eq!(recent_ids(&resp), vec!["f1", "f2"]);
}

#[test]
fn view_history_is_capped_at_five() {
    let catalog = test_catalog();
    let resp = handle(
        get_with_cookie("/property/f1", &cookie_for(&["a", "b", "c", "d", "e"])),
        &catalog,
    )
    .unwrap();
    assert_eq!(recent_ids(&resp), vec!["f1", "a", "b", "c", "d"]);
}

#[test]
fn sidebar_shows_previous_views_but_not_the_current_page() {
    let catalog = test_catalog();
    let resp = handle(
        get_with_cookie("/property/f2", &cookie_for(&["f2", "f1"])),
        &catalog,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("Recently Viewed"));
    assert!(body.contains("Koramangala Corner Flat"));
    // The rail links to the earlier view, never back to the current page.
    assert!(body.contains("/property/f1"));
    assert!(!body.contains("/property/f2"));
}

#[test]
fn garbage_cookie_still_renders_the_page() {
    let catalog = test_catalog();
    let resp = handle(
        get_with_cookie("/property/f1", "last_viewed=!!not-base64!!"),
        &catalog,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(recent_ids(&resp), vec!["f1"]);
}

#[test]
fn missing_optional_fields_are_omitted_from_display() {
    let catalog = test_catalog();
    // Fixtures carry no bedroom/bathroom/area data.
    let body = body_string(handle(get("/property/f4"), &catalog).unwrap());
    assert!(!body.contains("Bedrooms"));
    assert!(!body.contains("Sq Ft"));
}

// src/tests/router_tests/finder_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog};
use serde_json::Value;

fn marker_ids(json: &str) -> Vec<String> {
    let markers: Vec<Value> = serde_json::from_str(json).unwrap();
    markers
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn home_page_links_to_the_finder() {
    let catalog = test_catalog();
    let resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Search Rentals"));
}

#[test]
fn finder_without_query_lists_everything() {
    let catalog = test_catalog();
    let resp = handle(get("/property-finder"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Koramangala Corner Flat"));
    assert!(body.contains("Worli Skyline Villa"));
    assert!(body.contains("Over 5 stays"));
}

#[test]
fn city_query_narrows_the_list() {
    let catalog = test_catalog();
    let resp = handle(get("/property-finder?city=Mumbai"), &catalog).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Bandra Sea Breeze"));
    assert!(body.contains("Worli Skyline Villa"));
    assert!(!body.contains("Koramangala Corner Flat"));
}

#[test]
fn price_query_is_inclusive_and_swaps_reversed_ranges() {
    let catalog = test_catalog();

    let resp = handle(get("/api/properties?min_price=18000&max_price=30000"), &catalog).unwrap();
    assert_eq!(marker_ids(&body_string(resp)), vec!["f1", "f4"]);

    // Reversed interval is normalized, not rejected.
    let resp = handle(get("/api/properties?min_price=30000&max_price=18000"), &catalog).unwrap();
    assert_eq!(marker_ids(&body_string(resp)), vec!["f1", "f4"]);
}

#[test]
fn api_without_filters_returns_every_marker_in_order() {
    let catalog = test_catalog();
    let resp = handle(get("/api/properties"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(marker_ids(&body_string(resp)), vec!["f1", "f2", "f3", "f4", "f5"]);
}

#[test]
fn api_type_filter_selects_only_that_type() {
    let catalog = test_catalog();
    let resp = handle(get("/api/properties?type=villa"), &catalog).unwrap();
    assert_eq!(marker_ids(&body_string(resp)), vec!["f2", "f5"]);
}

#[test]
fn api_viewport_bbox_limits_markers() {
    let catalog = test_catalog();
    // Box around Bengaluru only; north edge exactly on f1's latitude.
    let resp = handle(
        get("/api/properties?north=12.97&south=12.0&east=78.0&west=77.0"),
        &catalog,
    )
    .unwrap();
    assert_eq!(marker_ids(&body_string(resp)), vec!["f1", "f2"]);
}

#[test]
fn partial_bbox_means_no_viewport_constraint() {
    let catalog = test_catalog();
    let resp = handle(get("/api/properties?north=12.97&south=12.0"), &catalog).unwrap();
    assert_eq!(marker_ids(&body_string(resp)).len(), 5);
}

#[test]
fn malformed_numeric_filters_are_rejected() {
    let catalog = test_catalog();
    let result = handle(get("/api/properties?min_price=abc"), &catalog);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_routes_are_not_found() {
    let catalog = test_catalog();
    assert!(handle(get("/nope"), &catalog).is_err());
    assert!(handle(get("/api/nope"), &catalog).is_err());
}

// src/tests/router_tests/cities_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog};

#[test]
fn cities_page_shows_per_city_aggregates() {
    let catalog = test_catalog();
    let resp = handle(get("/cities"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // Bengaluru: (30000 + 90000) / 2.
    assert!(body.contains("₹60,000"));
    // Mumbai: (120000 + 250000) / 2.
    assert!(body.contains("₹1,85,000"));
    assert!(body.contains("2 listings"));
    assert!(body.contains("1 listings"));
}

#[test]
fn cities_are_ordered_by_count_then_average() {
    let catalog = test_catalog();
    let body = body_string(handle(get("/cities"), &catalog).unwrap());

    // Bengaluru and Mumbai both have two listings; Mumbai's average wins.
    // Pune has one listing and comes last.
    let mumbai = body.find("Mumbai").unwrap();
    let bengaluru = body.find("Bengaluru").unwrap();
    let pune = body.find("Pune").unwrap();
    assert!(mumbai < bengaluru);
    assert!(bengaluru < pune);
}

#[test]
fn city_cards_drill_down_with_an_escaped_query() {
    let catalog = test_catalog();
    let body = body_string(handle(get("/cities"), &catalog).unwrap());
    assert!(body.contains("/property-finder?city=Mumbai"));
}

// templates/pages/finder.rs

use crate::domain::filter::FilterCriteria;
use crate::domain::property::{Property, PropertyType};
use crate::templates::{desktop_layout, property_card};
use maud::{html, Markup};

/// View model for the finder page: the current criteria, the matching
/// listings, and the options the filter bar offers.
pub struct FinderVm<'a> {
    pub criteria: &'a FilterCriteria,
    pub results: &'a [&'a Property],
    pub cities: &'a [&'a str],
    /// Catalog-wide (min, max) price, the slider's extent.
    pub price_bounds: (i64, i64),
    /// Raw query string of the current request, handed to the map glue so
    /// `/api/properties` sees the same filters.
    pub query: &'a str,
}

pub fn finder_page(vm: &FinderVm) -> Markup {
    desktop_layout(
        "Search Rentals",
        html! {
            main class="finder" {
                (filter_bar(vm))
                div class="split" {
                    section class="results" {
                        @if vm.results.is_empty() {
                            div class="empty-state" {
                                h3 { "No exact matches" }
                                p { "Try adjusting your search or filters" }
                            }
                        } @else {
                            p class="muted" { "Over " (vm.results.len()) " stays" }
                            div class="grid" {
                                @for p in vm.results {
                                    (property_card(p))
                                }
                            }
                        }
                    }
                    section class="map-pane" {
                        div id="map" data-query=(vm.query) {}
                    }
                }
            }
        },
    )
}

fn filter_bar(vm: &FinderVm) -> Markup {
    let (lo, hi) = vm.price_bounds;
    html! {
        form class="filter-bar" method="get" action="/property-finder" {
            fieldset {
                legend { "Price / month" }
                input type="number" name="min_price" min=(lo) max=(hi) step="5000"
                    value=(vm.criteria.min_price);
                " – "
                input type="number" name="max_price" min=(lo) max=(hi) step="5000"
                    value=(vm.criteria.max_price);
            }
            fieldset {
                legend { "Type" }
                @for t in PropertyType::ALL {
                    label class="pill" {
                        input type="checkbox" name="type" value=(t.as_str())
                            checked[vm.criteria.types.contains(&t)];
                        (t.label())
                    }
                }
            }
            fieldset {
                legend { "City" }
                @for city in vm.cities {
                    label class="pill" {
                        input type="checkbox" name="city" value=(city)
                            checked[vm.criteria.cities.iter().any(|c| c == city)];
                        (city)
                    }
                }
            }
            button type="submit" { "Apply" }
            a href="/property-finder" { "Clear all" }
        }
    }
}

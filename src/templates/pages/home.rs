// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(listing_count: usize, city_count: usize) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Live where the city feels like home." }
                    p {
                        "Browse " strong { (listing_count) } " curated rentals across "
                        strong { (city_count) } " cities, on the map or by neighbourhood."
                    }
                    p {
                        a class="button" href="/property-finder" { "Search Rentals" }
                        " "
                        a class="button secondary" href="/cities" { "Compare Cities" }
                    }
                }
            }
        },
    )
}

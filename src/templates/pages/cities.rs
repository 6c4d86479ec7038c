// templates/pages/cities.rs

use crate::domain::stats::CityStats;
use crate::templates::{desktop_layout, format_price};
use maud::{html, Markup};
use url::form_urlencoded;

pub fn cities_page(stats: &[CityStats]) -> Markup {
    desktop_layout(
        "Cities",
        html! {
            main class="container" {
                p class="eyebrow" { "neighbourhood insights" }
                h1 { "Compare cities before you book a viewing." }

                div class="grid" {
                    @for city in stats {
                        (city_card(city))
                    }
                }
            }
        },
    )
}

fn city_card(city: &CityStats) -> Markup {
    let drill_down: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("city", &city.city)
        .finish();

    html! {
        a class="card city-card" href={ "/property-finder?" (drill_down) } {
            div class="card-head" {
                h2 { (city.city) }
                span class="badge" { (city.count) " listings" }
            }
            dl class="stat-grid" {
                div { dt { "Average Rent" } dd { (format_price(city.average)) } }
                div { dt { "Popular Type" } dd { (city.popular_type.label()) } }
                div { dt { "Entry-Level" } dd { (format_price(city.min)) } }
                div { dt { "Premium" } dd { (format_price(city.max)) } }
            }
            p class="eyebrow" { "View homes in " (city.city) " →" }
        }
    }
}

// templates/pages/property.rs

use crate::domain::property::Property;
use crate::templates::{desktop_layout, format_price, recent_rail};
use maud::{html, Markup};

/// Detail page for one listing. `viewed` holds the previously viewed
/// listings to show in the sidebar (the current one already excluded).
pub fn property_page(p: &Property, viewed: &[&Property]) -> Markup {
    desktop_layout(
        p.display_title(),
        html! {
            main class="container detail" {
                p { a href="/property-finder" { "← Back to Map" } }

                div class="split" {
                    article {
                        img class="hero-photo" src=(p.photo) alt=(p.display_title());

                        section class="card" {
                            span class="badge" { (p.property_type.label()) }
                            span class="badge" { (p.city) }
                            @if let Some(hood) = &p.neighborhood {
                                p class="eyebrow" { (hood) }
                            }
                            h1 { (p.display_title()) }
                            @if let Some(desc) = &p.description {
                                p { (desc) }
                            }
                            p class="price" {
                                strong { (format_price(p.price)) }
                                span class="muted" { " / month" }
                            }

                            @if p.bedrooms.is_some() || p.bathrooms.is_some() || p.area.is_some() {
                                h2 { "Property Details" }
                                dl class="stat-grid" {
                                    @if let Some(beds) = p.bedrooms {
                                        div { dt { "Bedrooms" } dd { (beds) } }
                                    }
                                    @if let Some(baths) = p.bathrooms {
                                        div { dt { "Bathrooms" } dd { (baths) } }
                                    }
                                    @if let Some(area) = p.area {
                                        div { dt { "Sq Ft" } dd { (area) } }
                                    }
                                }
                            }

                            h2 { "Location" }
                            p {
                                (p.city)
                                @if let Some(hood) = &p.neighborhood { " • " (hood) }
                            }
                            p class="muted" {
                                "Latitude " (format!("{:.4}", p.lat))
                                " / Longitude " (format!("{:.4}", p.lng))
                            }
                        }
                    }

                    aside {
                        (recent_rail(viewed))
                    }
                }
            }
        },
    )
}

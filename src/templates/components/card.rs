use crate::domain::property::Property;
use crate::templates::format_price;
use maud::{html, Markup};

/// One listing card as shown in the finder list.
pub fn property_card(p: &Property) -> Markup {
    html! {
        a class="card property-card" href={ "/property/" (p.id) } {
            img src=(p.photo) alt=(p.display_title()) loading="lazy";
            div class="card-body" {
                h3 {
                    (p.city)
                    @if let Some(hood) = &p.neighborhood {
                        ", " (hood)
                    }
                }
                p class="muted" { (p.display_title()) }
                @if let (Some(beds), Some(baths)) = (p.bedrooms, p.bathrooms) {
                    p class="muted" {
                        (beds) " bed" @if beds != 1 { "s" }
                        " · "
                        (baths) " bath" @if baths != 1 { "s" }
                    }
                }
                p class="price" {
                    strong { (format_price(p.price)) }
                    span class="muted" { " / month" }
                }
            }
        }
    }
}

/// Compact "Recently Viewed" rail shown beside a detail page.
pub fn recent_rail(viewed: &[&Property]) -> Markup {
    html! {
        @if !viewed.is_empty() {
            section class="card recent-rail" {
                h2 { "Recently Viewed" }
                ul {
                    @for p in viewed {
                        li {
                            a href={ "/property/" (p.id) } {
                                strong { (p.display_title()) }
                                span class="muted" { " — " (p.property_type.label()) ", " (format_price(p.price)) "/month" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Property Finder" }
                link rel="stylesheet" href="/static/main.css";
                // Map widget (external capability: markers, popups, viewport events).
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {}
                script src="/static/map.js" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" { "Property Finder" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/property-finder" { "Search Rentals" } }
                            li { a href="/cities" { "Cities" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

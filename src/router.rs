use crate::catalog::Catalog;
use crate::domain::filter::{filter_listings, Bounds, FilterCriteria};
use crate::domain::property::{Property, PropertyType};
use crate::domain::stats::city_stats;
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_cookie, json_response, static_response, ResultResp,
};
use crate::session;
use crate::templates::pages::finder::FinderVm;
use crate::templates::{format_price, pages};
use astra::Request;
use serde::Serialize;
use url::form_urlencoded;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            html_response(pages::home_page(catalog.listings().len(), catalog.cities().len()))
        }
        ("GET", "/property-finder") => finder(&req, catalog),
        ("GET", "/cities") => html_response(pages::cities_page(&city_stats(catalog.listings()))),
        ("GET", "/api/properties") => api_properties(&req, catalog),
        ("GET", _) => {
            if let Some(id) = path.strip_prefix("/property/") {
                property_detail(&req, catalog, id)
            } else if let Some(name) = path.strip_prefix("/static/") {
                static_response(name)
            } else {
                Err(ServerError::NotFound)
            }
        }
        _ => Err(ServerError::NotFound),
    }
}

fn finder(req: &Request, catalog: &Catalog) -> ResultResp {
    let query = req.uri().query().unwrap_or("");
    let criteria = parse_filters(query, catalog)?;
    let results = filter_listings(catalog.listings(), &criteria);
    let cities = catalog.cities();

    html_response(pages::finder_page(&FinderVm {
        criteria: &criteria,
        results: &results,
        cities: &cities,
        price_bounds: catalog.price_bounds(),
        query,
    }))
}

/// Marker record for the map widget: enough to place a pin, label it, and
/// link its popup to the detail page.
#[derive(Serialize)]
struct Marker<'a> {
    id: &'a str,
    lat: f64,
    lng: f64,
    price: i64,
    price_label: String,
    title: &'a str,
    url: String,
}

/// The map-widget boundary. The widget re-requests this endpoint with
/// `north`/`south`/`east`/`west` on every viewport change; each request is
/// independent and idempotent given its query, so event order never matters.
fn api_properties(req: &Request, catalog: &Catalog) -> ResultResp {
    let query = req.uri().query().unwrap_or("");
    let criteria = parse_filters(query, catalog)?;

    let markers: Vec<Marker> = filter_listings(catalog.listings(), &criteria)
        .into_iter()
        .map(|p| Marker {
            id: &p.id,
            lat: p.lat,
            lng: p.lng,
            price: p.price,
            price_label: format!("{}/month", format_price(p.price)),
            title: p.display_title(),
            url: format!("/property/{}", p.id),
        })
        .collect();

    json_response(&markers)
}

fn property_detail(req: &Request, catalog: &Catalog, id: &str) -> ResultResp {
    let property = catalog.get(id).ok_or(ServerError::NotFound)?;

    let mut recent = session::recent_from_request(req);

    // Sidebar shows what was viewed before this visit, current page excluded.
    let viewed: Vec<&Property> = recent
        .ids()
        .iter()
        .filter_map(|viewed_id| catalog.get(viewed_id))
        .filter(|p| p.id != id)
        .take(3)
        .collect();

    recent.record(id);
    let cookie = session::recent_cookie(&recent)?;

    html_response_with_cookie(pages::property_page(property, &viewed), &cookie)
}

/// Decodes filter criteria from a query string. Absent parameters default
/// to the wildcard/full-range criteria. Numeric parameters that fail to
/// parse are rejected outright; an unknown `type` value is ignored, since
/// the UI only offers the closed set. A reversed price interval is
/// normalized by the criteria constructor.
fn parse_filters(query: &str, catalog: &Catalog) -> Result<FilterCriteria, ServerError> {
    fn numeric<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ServerError> {
        value
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid {key}: {value}")))
    }

    let (lo, hi) = catalog.price_bounds();
    let mut min_price = lo;
    let mut max_price = hi;
    let mut types: Vec<PropertyType> = Vec::new();
    let mut cities: Vec<String> = Vec::new();
    let (mut north, mut south, mut east, mut west) = (None, None, None, None);

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "min_price" => min_price = numeric("min_price", &value)?,
            "max_price" => max_price = numeric("max_price", &value)?,
            "type" => {
                if let Some(t) = PropertyType::parse(&value) {
                    if !types.contains(&t) {
                        types.push(t);
                    }
                }
            }
            "city" => {
                let city = value.into_owned();
                if !cities.contains(&city) {
                    cities.push(city);
                }
            }
            "north" => north = Some(numeric("north", &value)?),
            "south" => south = Some(numeric("south", &value)?),
            "east" => east = Some(numeric("east", &value)?),
            "west" => west = Some(numeric("west", &value)?),
            _ => {}
        }
    }

    // A viewport constraint needs all four edges; anything less means none.
    let bounds = match (north, south, east, west) {
        (Some(north), Some(south), Some(east), Some(west)) => Some(Bounds {
            north,
            south,
            east,
            west,
        }),
        _ => None,
    };

    let mut criteria = FilterCriteria::price_range(min_price, max_price);
    criteria.types = types;
    criteria.cities = cities;
    criteria.bounds = bounds;
    Ok(criteria)
}

// src/domain/filter.rs

use crate::domain::property::{Property, PropertyType};

/// Geographic viewport box as reported by the map widget. All four edges
/// are inclusive, so a listing sitting exactly on a boundary is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}

/// User-driven filter state. Empty `types` / `cities` are wildcards that
/// accept every listing, not "reject all".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_price: i64,
    pub max_price: i64,
    pub types: Vec<PropertyType>,
    pub cities: Vec<String>,
    pub bounds: Option<Bounds>,
}

impl FilterCriteria {
    /// Builds criteria for a price interval with wildcard type/city sets and
    /// no viewport constraint. A reversed interval is normalized by swapping
    /// the endpoints, so the engine always sees `min <= max`.
    pub fn price_range(low: i64, high: i64) -> Self {
        let (min_price, max_price) = if low <= high { (low, high) } else { (high, low) };
        FilterCriteria {
            min_price,
            max_price,
            types: Vec::new(),
            cities: Vec::new(),
            bounds: None,
        }
    }

    fn accepts(&self, p: &Property) -> bool {
        let in_price = p.price >= self.min_price && p.price <= self.max_price;
        let matches_type = self.types.is_empty() || self.types.contains(&p.property_type);
        let matches_city = self.cities.is_empty() || self.cities.iter().any(|c| *c == p.city);
        let in_bounds = self
            .bounds
            .map(|b| b.contains(p.lat, p.lng))
            .unwrap_or(true);
        in_price && matches_type && matches_city && in_bounds
    }
}

/// Returns the sub-sequence of `listings` satisfying `criteria`, in the
/// original relative order. Pure and deterministic; never reorders,
/// duplicates, or fabricates entries.
pub fn filter_listings<'a>(listings: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    debug_assert!(
        criteria.min_price <= criteria.max_price,
        "price interval must be normalized before filtering"
    );
    listings.iter().filter(|p| criteria.accepts(p)).collect()
}

// src/catalog.rs

use crate::domain::property::Property;
use crate::errors::ServerError;

/// The static catalog shipped with the binary. Decoded once at startup.
const CATALOG_JSON: &str = include_str!("../data/properties.json");

/// The fixed, ordered listing collection every page works from. Immutable
/// for the process lifetime; handlers borrow it and derive fresh results.
pub struct Catalog {
    listings: Vec<Property>,
}

impl Catalog {
    /// Decodes the embedded catalog. Failure here is fatal: a binary with a
    /// malformed catalog has nothing to serve.
    pub fn load_embedded() -> Result<Self, ServerError> {
        let listings: Vec<Property> = serde_json::from_str(CATALOG_JSON)
            .map_err(|e| ServerError::DataError(format!("catalog decode failed: {e}")))?;
        Ok(Self::from_listings(listings))
    }

    pub fn from_listings(listings: Vec<Property>) -> Self {
        Catalog { listings }
    }

    pub fn listings(&self) -> &[Property] {
        &self.listings
    }

    /// Unknown ids are a not-found outcome for the caller, never a failure.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.listings.iter().find(|p| p.id == id)
    }

    /// Distinct city names, sorted, for the filter bar.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.listings.iter().map(|p| p.city.as_str()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities
    }

    /// (min, max) price over the whole catalog; the default filter range.
    /// An empty catalog yields (0, 0).
    pub fn price_bounds(&self) -> (i64, i64) {
        let mut prices = self.listings.iter().map(|p| p.price);
        match prices.next() {
            None => (0, 0),
            Some(first) => prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))),
        }
    }
}

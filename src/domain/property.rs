// src/domain/property.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of property types the catalog can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Villa,
    Studio,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Villa,
        PropertyType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Villa => "villa",
            PropertyType::Studio => "studio",
        }
    }

    /// Capitalized form for display ("Apartment").
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Villa => "Villa",
            PropertyType::Studio => "Studio",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rental listing from the static catalog.
///
/// The catalog is immutable for the process lifetime; nothing creates,
/// mutates, or deletes a `Property` at runtime. Optional descriptive fields
/// that are missing are simply omitted from display, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Monthly amount, currency-agnostic positive integer.
    pub price: i64,
    pub photo: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub city: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<u32>,
}

impl Property {
    /// Display name used in lists and marker popups: the title when present,
    /// otherwise the capitalized type.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.property_type.label())
    }
}

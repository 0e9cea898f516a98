//! Property listings as supplied by the listing store

use serde::{Deserialize, Serialize};

/// A property for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub city: Option<String>,
    /// Asking price in NOK (0 when unknown)
    pub price: f64,
    /// Usable floor area (BRA) in m²
    pub sqm: Option<f64>,
    pub bedrooms: Option<u32>,
    /// Free-text type from the listing, e.g. "Leilighet" or "Enebolig"
    pub property_type: Option<String>,
}

impl PropertyListing {
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            city: None,
            price,
            sqm: None,
            bedrooms: None,
            property_type: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_sqm(mut self, sqm: f64) -> Self {
        self.sqm = Some(sqm);
        self
    }

    pub fn with_bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    /// Asking price per m², if the area is known
    pub fn price_per_sqm(&self) -> Option<f64> {
        match self.sqm {
            Some(sqm) if sqm > 0.0 => Some(self.price / sqm),
            _ => None,
        }
    }
}

/// Broad property categories used in rent statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Apartment
    Leilighet,
    /// Detached house
    Enebolig,
    /// Terraced house
    Rekkehus,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Leilighet,
        PropertyType::Enebolig,
        PropertyType::Rekkehus,
    ];

    /// Classify a free-text listing type (case-insensitive substring match)
    pub fn classify(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        PropertyType::ALL
            .into_iter()
            .find(|t| lower.contains(t.key()))
    }

    pub fn key(&self) -> &'static str {
        match self {
            PropertyType::Leilighet => "leilighet",
            PropertyType::Enebolig => "enebolig",
            PropertyType::Rekkehus => "rekkehus",
        }
    }
}

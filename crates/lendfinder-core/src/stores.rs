use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// `true` when the provider omitted coordinates and both default to zero.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// A lender storefront, normalized from a place-search provider record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// `store-{placeId}` or `store-{index}` when the provider sent no identifier.
    pub id: String,
    pub name: String,
    /// Display address, composed from street/city/state/zip where available.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    /// `{0, 0}` when the provider omitted coordinates.
    pub coordinates: Coordinates,
    /// Unique service labels; never empty.
    pub services: Vec<String>,
    /// Opening hours keyed by day name, as the provider spelled it.
    pub hours: BTreeMap<String, String>,
    pub rating: f64,
    pub review_count: u64,
    pub website: String,
    pub place_id: String,
    pub url: String,
}

impl Store {
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        !self.coordinates.is_unknown()
    }
}

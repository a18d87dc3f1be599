//! Domain types for a store search.

use lendfinder_core::Store;
use serde::{Deserialize, Serialize};

/// Where to search: a free-text place ("Philadelphia, PA") or a postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationInput {
    FreeText(String),
    PostalCode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub location: LocationInput,
    /// Service slug such as `"payday-loans"`. Unknown slugs search for the
    /// generic phrase.
    pub service_category: String,
    /// Accepted and logged; the provider's own location bias decides reach.
    pub radius_miles: Option<u32>,
}

/// Result of parsing a [`LocationInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLocation {
    /// Sent to the provider verbatim (trimmed).
    pub search_location: String,
    /// Canonical full state name, e.g. `"Pennsylvania"`.
    pub target_state: Option<String>,
    pub target_city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Ranked and truncated; empty when nothing matched.
    pub stores: Vec<Store>,
    /// Store count after filtering, before truncation.
    pub total_before_truncation: usize,
    pub search_location: String,
    pub applied_filters: AppliedFilters,
    /// Records the provider returned before normalization.
    pub raw_result_count: usize,
}

/// Request body sent to the places provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub search_strings_array: Vec<String>,
    pub location: String,
    pub max_crawled_places_per_search: usize,
    pub language: String,
}

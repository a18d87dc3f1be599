//! Store locator pipeline.
//!
//! Turns a free-text location or postal code plus a service category into a
//! ranked, geographically filtered list of [`lendfinder_core::Store`]
//! records. The place search itself is delegated to a provider behind the
//! [`PlaceSearch`] trait; [`PlacesClient`] is the HTTP implementation.

pub mod error;
pub mod filter;
pub mod location;
pub mod normalize;
pub mod pipeline;
pub mod provider;
pub mod queries;
pub mod rank;
pub mod types;

pub use error::LocatorError;
pub use filter::{filter_by_geography, filter_by_postal_code};
pub use location::parse_location_input;
pub use normalize::normalize_place_record;
pub use pipeline::search_stores;
pub use provider::{extract_places, PlaceSearch, PlacesClient};
pub use queries::build_provider_queries;
pub use rank::rank_and_truncate;
pub use types::{
    AppliedFilters, LocationInput, LocationQuery, ParsedLocation, ProviderRequest, SearchOutcome,
};

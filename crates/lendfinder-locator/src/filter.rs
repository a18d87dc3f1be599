//! Geographic and postal filters over normalized stores.
//!
//! Provider state fields are inconsistently formatted ("CA", "California",
//! "Calif."), so the state comparison is deliberately lenient.

use lendfinder_core::{normalize_state_name, state_abbreviation, Store};

/// Keeps stores that plausibly lie in the target area.
///
/// With a target state, a store passes on any state match and city is not
/// checked (stores near a border may report a neighbouring city). With only
/// a target city, the store's city or address must mention it. With neither,
/// all stores pass.
#[must_use]
pub fn filter_by_geography(
    stores: Vec<Store>,
    target_state: Option<&str>,
    target_city: Option<&str>,
) -> Vec<Store> {
    if let Some(state) = target_state.filter(|s| !s.trim().is_empty()) {
        let target = StateTarget::new(state);
        return stores
            .into_iter()
            .filter(|store| target.matches(store))
            .collect();
    }

    if let Some(city) = target_city.filter(|c| !c.trim().is_empty()) {
        let city = city.trim().to_lowercase();
        return stores
            .into_iter()
            .filter(|store| city_matches(store, &city))
            .collect();
    }

    stores
}

/// Keeps stores whose postal code starts with `postal_code`, plus stores with
/// no postal code on record. Inputs shorter than three characters disable
/// the filter.
#[must_use]
pub fn filter_by_postal_code(stores: Vec<Store>, postal_code: &str) -> Vec<Store> {
    let prefix = postal_code.trim();
    if prefix.len() < 3 {
        return stores;
    }
    stores
        .into_iter()
        .filter(|store| {
            let zip = store.zip_code.trim();
            zip.is_empty() || zip.starts_with(prefix)
        })
        .collect()
}

struct StateTarget {
    full_name: String,
    abbr: String,
}

impl StateTarget {
    fn new(state: &str) -> Self {
        Self {
            full_name: normalize_state_name(state).to_lowercase(),
            abbr: state_abbreviation(state).to_lowercase(),
        }
    }

    fn matches(&self, store: &Store) -> bool {
        let raw = store.state.trim().to_lowercase();
        if !raw.is_empty() {
            let normalized = normalize_state_name(&store.state).to_lowercase();
            let abbr = state_abbreviation(&store.state).to_lowercase();
            if normalized == self.full_name
                || raw == self.abbr
                || abbr == self.abbr
                || normalized.contains(&self.full_name)
                || self.full_name.contains(&normalized)
            {
                return true;
            }
        }

        let address = store.address.to_lowercase();
        address.contains(&self.full_name) || contains_token(&address, &self.abbr)
    }
}

fn city_matches(store: &Store, city: &str) -> bool {
    let store_city = store.city.trim().to_lowercase();
    (!store_city.is_empty() && store_city.contains(city))
        || store.address.to_lowercase().contains(city)
}

/// Whole-word match, so "ca" does not hit "Camino".
fn contains_token(haystack: &str, token: &str) -> bool {
    !token.is_empty()
        && haystack
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|word| word == token)
}

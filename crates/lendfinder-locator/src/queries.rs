use lendfinder_core::{ServiceCategory, GENERIC_SEARCH_PHRASE};

/// Search strings for the provider, one per canonical phrase of the service,
/// each suffixed with `" in {location}"` when a location is given.
///
/// Unknown services fall back to the generic phrase, so the result is never
/// empty.
#[must_use]
pub fn build_provider_queries(service_category: &str, search_location: &str) -> Vec<String> {
    let phrases: &[&str] = match ServiceCategory::from_slug(service_category) {
        Some(category) => category.search_phrases(),
        None => &[GENERIC_SEARCH_PHRASE],
    };
    let location = search_location.trim();

    phrases
        .iter()
        .map(|phrase| {
            if location.is_empty() {
                (*phrase).to_string()
            } else {
                format!("{phrase} in {location}")
            }
        })
        .collect()
}

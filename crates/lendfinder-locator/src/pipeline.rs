use crate::error::LocatorError;
use crate::filter::{filter_by_geography, filter_by_postal_code};
use crate::location::parse_location_input;
use crate::normalize::normalize_place_record;
use crate::provider::PlaceSearch;
use crate::queries::build_provider_queries;
use crate::rank::rank_and_truncate;
use crate::types::{AppliedFilters, LocationInput, LocationQuery, ProviderRequest, SearchOutcome};

const PROVIDER_LANGUAGE: &str = "en";

/// Runs one store search end to end: parse the location, query the provider
/// once, normalize, filter, rank, truncate to `max_results`.
///
/// Filters run only for targets that were derived from the input. An empty
/// provider response is a successful, empty outcome.
///
/// # Errors
///
/// - [`LocatorError::InvalidInput`] for a blank location or service.
/// - [`LocatorError::Provider`] / [`LocatorError::Http`] from the provider
///   call, unchanged.
pub async fn search_stores<P: PlaceSearch>(
    provider: &P,
    query: &LocationQuery,
    max_results: usize,
) -> Result<SearchOutcome, LocatorError> {
    let service = query.service_category.trim();
    if service.is_empty() {
        return Err(LocatorError::InvalidInput(
            "service category is required".to_string(),
        ));
    }

    let parsed = parse_location_input(&query.location)?;
    let postal_code = match &query.location {
        LocationInput::PostalCode(code) => Some(code.trim().to_string()),
        LocationInput::FreeText(_) => None,
    };

    let request = ProviderRequest {
        search_strings_array: build_provider_queries(service, &parsed.search_location),
        location: parsed.search_location.clone(),
        max_crawled_places_per_search: max_results,
        language: PROVIDER_LANGUAGE.to_string(),
    };
    tracing::info!(
        service,
        location = %parsed.search_location,
        target_state = parsed.target_state.as_deref(),
        target_city = parsed.target_city.as_deref(),
        radius_miles = query.radius_miles,
        "searching stores"
    );

    let raw = provider.search_places(&request).await?;
    let raw_result_count = raw.len();

    let mut stores: Vec<_> = raw
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_place_record(record, service, index))
        .collect();

    if parsed.target_state.is_some() || parsed.target_city.is_some() {
        let before = stores.len();
        stores = filter_by_geography(
            stores,
            parsed.target_state.as_deref(),
            parsed.target_city.as_deref(),
        );
        tracing::debug!(stage = "geography", before, after = stores.len(), "filtered stores");
    }

    if let Some(code) = postal_code.as_deref() {
        let before = stores.len();
        stores = filter_by_postal_code(stores, code);
        tracing::debug!(stage = "postal_code", before, after = stores.len(), "filtered stores");
    }

    let total_before_truncation = stores.len();
    let stores = rank_and_truncate(stores, max_results);
    tracing::debug!(
        raw_result_count,
        total_before_truncation,
        returned = stores.len(),
        "store search complete"
    );

    Ok(SearchOutcome {
        stores,
        total_before_truncation,
        search_location: parsed.search_location,
        applied_filters: AppliedFilters {
            state: parsed.target_state,
            city: parsed.target_city,
            zip_code: postal_code,
        },
        raw_result_count,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{json, Value};

    use super::*;

    /// Returns canned records and remembers the last request.
    struct FakeProvider {
        records: Vec<Value>,
        last_request: Mutex<Option<ProviderRequest>>,
    }

    impl FakeProvider {
        fn new(records: Vec<Value>) -> Self {
            Self {
                records,
                last_request: Mutex::new(None),
            }
        }
    }

    impl PlaceSearch for FakeProvider {
        async fn search_places(
            &self,
            request: &ProviderRequest,
        ) -> Result<Vec<Value>, LocatorError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(self.records.clone())
        }
    }

    struct FailingProvider;

    impl PlaceSearch for FailingProvider {
        async fn search_places(
            &self,
            _request: &ProviderRequest,
        ) -> Result<Vec<Value>, LocatorError> {
            Err(LocatorError::Provider {
                status: 402,
                message: "monthly usage exceeded".to_string(),
            })
        }
    }

    fn free_text(location: &str, service: &str) -> LocationQuery {
        LocationQuery {
            location: LocationInput::FreeText(location.to_string()),
            service_category: service.to_string(),
            radius_miles: Some(25),
        }
    }

    #[tokio::test]
    async fn empty_provider_response_is_empty_outcome() {
        let provider = FakeProvider::new(vec![]);
        let outcome = search_stores(&provider, &free_text("Philadelphia, PA", "payday-loans"), 20)
            .await
            .unwrap();
        assert!(outcome.stores.is_empty());
        assert_eq!(outcome.total_before_truncation, 0);
        assert_eq!(outcome.raw_result_count, 0);
    }

    #[tokio::test]
    async fn sends_expanded_queries_to_provider() {
        let provider = FakeProvider::new(vec![]);
        search_stores(&provider, &free_text("Philadelphia, PA", "title-loans"), 15)
            .await
            .unwrap();

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.location, "Philadelphia, PA");
        assert_eq!(request.max_crawled_places_per_search, 15);
        assert_eq!(request.language, "en");
        assert_eq!(
            request.search_strings_array[0],
            "title loans in Philadelphia, PA"
        );
    }

    #[tokio::test]
    async fn filters_by_state_and_ranks() {
        let provider = FakeProvider::new(vec![
            json!({"title": "A", "state": "PA", "totalScore": 4.1, "reviewsCount": 10}),
            json!({"title": "B", "state": "New Jersey", "address": "1 Route 38", "totalScore": 5.0}),
            json!({"title": "C", "state": "Pennsylvania", "totalScore": 4.8}),
        ]);
        let outcome = search_stores(&provider, &free_text("Philadelphia, PA", "payday-loans"), 20)
            .await
            .unwrap();

        let names: Vec<&str> = outcome.stores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
        assert_eq!(outcome.total_before_truncation, 2);
        assert_eq!(outcome.raw_result_count, 3);
        assert_eq!(outcome.applied_filters.state.as_deref(), Some("Pennsylvania"));
        assert_eq!(outcome.applied_filters.city.as_deref(), Some("Philadelphia"));
        assert_eq!(outcome.applied_filters.zip_code, None);
    }

    #[tokio::test]
    async fn postal_code_filters_by_prefix() {
        let provider = FakeProvider::new(vec![
            json!({"title": "Near", "postalCode": "19104"}),
            json!({"title": "Unknown zip"}),
            json!({"title": "Far", "postalCode": "08002"}),
        ]);
        let query = LocationQuery {
            location: LocationInput::PostalCode("19104".to_string()),
            service_category: "check-cashing".to_string(),
            radius_miles: None,
        };
        let outcome = search_stores(&provider, &query, 20).await.unwrap();
        assert_eq!(outcome.stores.len(), 2);
        assert_eq!(outcome.search_location, "19104");
        assert_eq!(outcome.applied_filters.zip_code.as_deref(), Some("19104"));
        assert_eq!(outcome.applied_filters.state, None);
    }

    #[tokio::test]
    async fn total_counts_before_truncation() {
        let records: Vec<Value> = (0..25).map(|i| json!({"title": format!("S{i}")})).collect();
        let provider = FakeProvider::new(records);
        let outcome = search_stores(&provider, &free_text("Springfield", "pawn-loans"), 20)
            .await
            .unwrap();
        assert_eq!(outcome.stores.len(), 20);
        assert_eq!(outcome.total_before_truncation, 25);
    }

    #[tokio::test]
    async fn provider_error_propagates_unchanged() {
        let err = search_stores(&FailingProvider, &free_text("Austin, TX", "payday-loans"), 20)
            .await
            .unwrap_err();
        assert!(matches!(err, LocatorError::Provider { status: 402, .. }));
    }

    #[tokio::test]
    async fn blank_service_is_invalid() {
        let provider = FakeProvider::new(vec![]);
        let err = search_stores(&provider, &free_text("Austin, TX", "  "), 20)
            .await
            .unwrap_err();
        assert!(matches!(err, LocatorError::InvalidInput(_)));
    }
}

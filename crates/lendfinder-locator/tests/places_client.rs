//! Integration tests for `PlacesClient::search_places` and `search_stores`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lendfinder_locator::{
    search_stores, LocationInput, LocationQuery, LocatorError, PlaceSearch, PlacesClient,
    ProviderRequest,
};

const ACTOR: &str = "compass~crawler-google-places";
const RUN_PATH: &str = "/v2/acts/compass~crawler-google-places/run-sync-get-dataset-items";

fn test_client(server: &MockServer) -> PlacesClient {
    PlacesClient::new("test-token", ACTOR, 5, "lendfinder-test/0.1")
        .expect("failed to build test PlacesClient")
        .with_base_url(&server.uri())
}

fn request() -> ProviderRequest {
    ProviderRequest {
        search_strings_array: vec!["payday loans in Austin, TX".to_string()],
        location: "Austin, TX".to_string(),
        max_crawled_places_per_search: 20,
        language: "en".to_string(),
    }
}

#[tokio::test]
async fn posts_request_body_and_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .and(query_param("token", "test-token"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "20"))
        .and(body_partial_json(json!({
            "searchStringsArray": ["payday loans in Austin, TX"],
            "location": "Austin, TX",
            "maxCrawledPlacesPerSearch": 20,
            "language": "en"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Cash Store"}])))
        .expect(1)
        .mount(&server)
        .await;

    let places = test_client(&server).search_places(&request()).await;
    assert!(places.is_ok(), "expected Ok, got: {places:?}");
    assert_eq!(places.unwrap().len(), 1);
}

#[tokio::test]
async fn unwraps_items_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"title": "A"}, {"title": "B"}]
        })))
        .mount(&server)
        .await;

    let places = test_client(&server).search_places(&request()).await.unwrap();
    assert_eq!(places.len(), 2);
}

#[tokio::test]
async fn error_status_carries_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"type": "token-not-valid", "message": "Authentication token is not valid."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_places(&request())
        .await
        .unwrap_err();
    match err {
        LocatorError::Provider { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Authentication token is not valid.");
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_places(&request())
        .await
        .unwrap_err();
    assert!(
        matches!(&err, LocatorError::Provider { status: 503, message } if message == "upstream unavailable"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn malformed_success_body_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_places(&request())
        .await
        .unwrap_err();
    assert!(
        matches!(err, LocatorError::Provider { status: 200, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn provider_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let query = LocationQuery {
        location: LocationInput::FreeText("Austin, TX".to_string()),
        service_category: "payday-loans".to_string(),
        radius_miles: None,
    };
    let result = search_stores(&test_client(&server), &query, 20).await;
    assert!(matches!(result, Err(LocatorError::Provider { status: 500, .. })));
}

#[tokio::test]
async fn search_stores_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "title": "Speedy Cash",
                "address": "100 Congress Ave",
                "city": "Austin",
                "state": "Texas",
                "postalCode": "78701",
                "totalScore": 4.4,
                "reviewsCount": 88,
                "categoryName": "Payday loan lender",
                "placeId": "abc"
            },
            {
                "title": "Sooner Loans",
                "city": "Tulsa",
                "state": "Oklahoma",
                "totalScore": 4.9
            }
        ])))
        .mount(&server)
        .await;

    let query = LocationQuery {
        location: LocationInput::FreeText("Austin, TX".to_string()),
        service_category: "payday-loans".to_string(),
        radius_miles: Some(10),
    };
    let outcome = search_stores(&test_client(&server), &query, 20)
        .await
        .unwrap();

    assert_eq!(outcome.raw_result_count, 2);
    assert_eq!(outcome.stores.len(), 1);
    let store = &outcome.stores[0];
    assert_eq!(store.id, "store-abc");
    assert_eq!(store.address, "100 Congress Ave, Austin, Texas 78701");
    assert_eq!(store.services, vec!["Payday Loan".to_string()]);
}

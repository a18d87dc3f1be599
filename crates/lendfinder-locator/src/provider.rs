//! Places-search provider boundary.

use std::future::Future;
use std::time::Duration;

use lendfinder_core::AppConfig;
use reqwest::Client;
use serde_json::Value;

use crate::error::LocatorError;
use crate::types::ProviderRequest;

pub const DEFAULT_BASE_URL: &str = "https://api.apify.com";
pub const DEFAULT_ACTOR: &str = "compass~crawler-google-places";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ERROR_MESSAGE: &str = "Failed to search locations";

/// A source of raw place records for a set of search strings.
///
/// Implementations make exactly one attempt per call.
pub trait PlaceSearch {
    fn search_places(
        &self,
        request: &ProviderRequest,
    ) -> impl Future<Output = Result<Vec<Value>, LocatorError>> + Send;
}

/// HTTP client for a hosted Google-Places crawler actor that returns dataset
/// items synchronously.
///
/// Non-2xx responses become [`LocatorError::Provider`] carrying the upstream
/// status and the most specific message found in the body. No retries.
pub struct PlacesClient {
    client: Client,
    base_url: String,
    actor: String,
    token: String,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("base_url", &self.base_url)
            .field("actor", &self.actor)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    /// Creates a client with the given request timeout and `User-Agent`,
    /// pointed at the public provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        token: &str,
        actor: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LocatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            actor: actor.to_string(),
            token: token.to_string(),
        })
    }

    /// Builds a client from application config, or `None` when no provider
    /// token is configured.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, LocatorError> {
        let Some(token) = config.places_api_token.as_deref() else {
            return Ok(None);
        };
        let client = Self::new(
            token,
            &config.places_actor,
            config.places_timeout_secs,
            &config.user_agent,
        )?
        .with_base_url(&config.places_base_url);
        Ok(Some(client))
    }

    /// Overrides the provider base URL, e.g. to point at a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v2/acts/{}/run-sync-get-dataset-items",
            self.base_url, self.actor
        )
    }
}

impl PlaceSearch for PlacesClient {
    async fn search_places(&self, request: &ProviderRequest) -> Result<Vec<Value>, LocatorError> {
        tracing::debug!(
            actor = %self.actor,
            queries = request.search_strings_array.len(),
            location = %request.location,
            limit = request.max_crawled_places_per_search,
            "calling places provider"
        );

        let limit = request.max_crawled_places_per_search.to_string();
        let response = self
            .client
            .post(self.endpoint())
            .query(&[
                ("token", self.token.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = provider_error_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "places provider error");
            return Err(LocatorError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: Value = serde_json::from_str(&body).map_err(|e| LocatorError::Provider {
            status: status.as_u16(),
            message: format!("malformed provider response: {e}"),
        })?;

        let places = extract_places(parsed);
        tracing::debug!(count = places.len(), "places provider returned records");
        Ok(places)
    }
}

/// Pulls the record array out of a provider response.
///
/// Accepts a bare array, an object with a `data` or `items` array, or any
/// object whose first array-valued field (in document order) holds the
/// records. Anything else is treated as no results.
#[must_use]
pub fn extract_places(response: Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in ["data", "items"] {
                if matches!(map.get(key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove(key) {
                        return items;
                    }
                }
            }
            map.into_iter()
                .find_map(|(_, v)| match v {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// `error` when it is a string, else `error.message`, else the raw body,
/// else a generic message.
fn provider_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(error) = json.get("error") {
            if let Some(message) = error.as_str() {
                return message.to_string();
            }
            if let Some(message) = error.get("message").and_then(Value::as_str) {
                return message.to_string();
            }
        }
        return DEFAULT_ERROR_MESSAGE.to_string();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        DEFAULT_ERROR_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

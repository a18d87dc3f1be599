use axum::{extract::State, http::StatusCode, Extension, Json};
use lendfinder_locator::{LocationInput, LocationQuery, LocatorError, SearchOutcome};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchStoresRequest {
    pub location: Option<String>,
    #[serde(alias = "zipCode")]
    pub zip_code: Option<String>,
    /// Radius in miles.
    pub distance: Option<u32>,
    #[serde(alias = "loanType")]
    pub loan_type: Option<String>,
}

/// Maps a pipeline error onto the API envelope.
///
/// Upstream 4xx/5xx statuses pass through so callers see what the provider
/// said; anything else from the provider becomes 502.
pub(super) fn map_locator_error(request_id: String, error: LocatorError) -> ApiError {
    match error {
        LocatorError::InvalidInput(message) => {
            ApiError::new(request_id, "validation_error", message)
        }
        LocatorError::NotConfigured => ApiError::new(
            request_id,
            "service_unavailable",
            "store search is not configured",
        ),
        LocatorError::Provider { status, message } => {
            tracing::warn!(status, %message, "places provider rejected search");
            let status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            ApiError::new(request_id, "provider_error", message).with_status(status)
        }
        LocatorError::Http(e) => {
            tracing::error!(error = %e, "places provider request failed");
            ApiError::new(request_id, "bad_gateway", "places provider request failed")
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) async fn search_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SearchStoresRequest>,
) -> Result<Json<ApiResponse<SearchOutcome>>, ApiError> {
    let Some(loan_type) = non_blank(body.loan_type) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "service type is required",
        ));
    };

    let location = match (non_blank(body.zip_code), non_blank(body.location)) {
        (Some(zip), _) => LocationInput::PostalCode(zip),
        (None, Some(text)) => LocationInput::FreeText(text),
        (None, None) => {
            return Err(ApiError::new(
                req_id.0,
                "validation_error",
                "location or zip code is required",
            ))
        }
    };

    let Some(places) = state.places.as_deref() else {
        return Err(map_locator_error(req_id.0, LocatorError::NotConfigured));
    };

    let query = LocationQuery {
        location,
        service_category: loan_type,
        radius_miles: body.distance,
    };

    let outcome = lendfinder_locator::search_stores(places, &query, state.max_results)
        .await
        .map_err(|e| map_locator_error(req_id.0.clone(), e))?;

    Ok(Json(ApiResponse::new(outcome, req_id.0)))
}

use axum::{http::HeaderMap, Extension, Json};
use chrono::Utc;
use lendfinder_core::LeadSubmission;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse};

const LEAD_SOURCE: &str = "loan-locator";

#[derive(Debug, Serialize)]
pub(super) struct LeadAccepted {
    pub success: bool,
    pub message: &'static str,
}

/// Validates and logs a lead. There is no CRM behind this endpoint; the log
/// line is the record.
pub(super) async fn submit_lead(
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
    Json(lead): Json<LeadSubmission>,
) -> Result<Json<ApiResponse<LeadAccepted>>, ApiError> {
    lead.validate()
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let client_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map_or("unknown", str::trim);

    tracing::info!(
        request_id = %req_id.0,
        source = LEAD_SOURCE,
        client_ip,
        received_at = %Utc::now(),
        loan_type = %lead.loan_type,
        store_id = %lead.store_id,
        preferred_location = %lead.preferred_location,
        loan_amount = %lead.loan_amount,
        "lead received"
    );

    Ok(Json(ApiResponse::new(
        LeadAccepted {
            success: true,
            message: "Lead submitted successfully",
        },
        req_id.0,
    )))
}

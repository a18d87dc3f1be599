use axum::{extract::Query, Extension, Json};
use lendfinder_amortize::{
    build_schedule, compose_mortgage_payment, down_payment_for_percent, AmortizeError,
    MortgageParameters, MortgagePaymentComposition, PaymentRecord, YearSummary,
};
use lendfinder_core::format_currency;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse};

/// Rows shown in the "first year" table.
const FIRST_PERIODS_SHOWN: usize = 12;

#[derive(Debug, Deserialize)]
pub(super) struct LoanQuery {
    pub principal: f64,
    /// Annual rate in percent.
    pub rate: f64,
    pub term_months: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct MortgageQuery {
    pub home_price: f64,
    /// Takes precedence over `down_payment_percent`.
    pub down_payment: Option<f64>,
    pub down_payment_percent: Option<f64>,
    pub rate: f64,
    pub term_years: u32,
    #[serde(default)]
    pub property_tax: f64,
    #[serde(default)]
    pub insurance: f64,
    #[serde(default)]
    pub hoa: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct LoanCalculation {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub term_months: usize,
    pub display: LoanDisplay,
    pub first_year: Vec<PaymentRecord>,
    pub yearly_summary: Vec<YearSummary>,
}

#[derive(Debug, Serialize)]
pub(super) struct LoanDisplay {
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_paid: String,
}

#[derive(Debug, Serialize)]
pub(super) struct MortgageCalculation {
    #[serde(flatten)]
    pub composition: MortgagePaymentComposition,
    pub down_payment: f64,
    pub display_total_monthly_payment: String,
}

fn map_amortize_error(request_id: String, error: &AmortizeError) -> ApiError {
    ApiError::new(request_id, "validation_error", error.to_string())
}

pub(super) async fn loan_calculation(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<LoanQuery>,
) -> Result<Json<ApiResponse<LoanCalculation>>, ApiError> {
    let schedule = build_schedule(query.principal, query.rate, query.term_months)
        .map_err(|e| map_amortize_error(req_id.0.clone(), &e))?;

    let data = LoanCalculation {
        monthly_payment: schedule.periodic_payment,
        total_interest: schedule.total_interest,
        total_paid: schedule.total_paid,
        term_months: schedule.term_periods(),
        display: LoanDisplay {
            monthly_payment: format_currency(schedule.periodic_payment),
            total_interest: format_currency(schedule.total_interest),
            total_paid: format_currency(schedule.total_paid),
        },
        first_year: schedule.first_periods(FIRST_PERIODS_SHOWN).to_vec(),
        yearly_summary: schedule.yearly_summary(),
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn mortgage_calculation(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<MortgageQuery>,
) -> Result<Json<ApiResponse<MortgageCalculation>>, ApiError> {
    let Some(down_payment) = query.down_payment.or_else(|| {
        query
            .down_payment_percent
            .map(|pct| down_payment_for_percent(query.home_price, pct))
    }) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "down_payment or down_payment_percent is required",
        ));
    };

    let params = MortgageParameters {
        home_price: query.home_price,
        down_payment,
        annual_rate_percent: query.rate,
        term_years: query.term_years,
        property_tax_annual: query.property_tax,
        insurance_annual: query.insurance,
        association_fee_monthly: query.hoa,
    };
    let composition = compose_mortgage_payment(&params)
        .map_err(|e| map_amortize_error(req_id.0.clone(), &e))?;

    let data = MortgageCalculation {
        display_total_monthly_payment: format_currency(composition.total_monthly_payment),
        down_payment,
        composition,
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}

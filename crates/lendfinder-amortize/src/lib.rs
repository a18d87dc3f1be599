//! Amortization engine for the loan and mortgage calculators.
//!
//! Fixed-rate, monthly-compounding, level-payment loans. All functions are
//! pure and deterministic; add-on costs (tax, insurance, HOA, PMI) are
//! composed on top of the engine's payment and never enter the schedule.

pub mod error;
pub mod mortgage;
pub mod schedule;

pub use error::AmortizeError;
pub use mortgage::{
    compose_mortgage_payment, down_payment_for_percent, MortgageParameters,
    MortgagePaymentComposition, PMI_ANNUAL_RATE, PMI_DOWN_PAYMENT_THRESHOLD_PERCENT,
};
pub use schedule::{
    build_schedule, compute_periodic_payment, AmortizationSchedule, LoanParameters,
    PaymentRecord, YearSummary, MAX_TERM_PERIODS,
};

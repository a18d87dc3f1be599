use serde::{Deserialize, Serialize};

use crate::AmortizeError;

const PERIODS_PER_YEAR: u32 = 12;

/// Longest accepted term: 100 years of monthly periods.
pub const MAX_TERM_PERIODS: u32 = 1_200;

/// Validated inputs for a fixed-rate, level-payment loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: f64,
    /// Nominal annual rate in percent; `0.0` means interest free.
    pub annual_rate_percent: f64,
    /// Number of monthly periods.
    pub term_periods: u32,
}

/// One row of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// 1-based.
    pub period_index: u32,
    pub payment_amount: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64,
}

/// Per-year roll-up of a schedule. The final year may hold fewer than twelve
/// periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// 1-based.
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: f64,
    pub periodic_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub records: Vec<PaymentRecord>,
}

impl LoanParameters {
    /// # Errors
    ///
    /// Returns [`AmortizeError::InvalidArgument`] when the principal is not a
    /// positive finite number, the rate is negative or non-finite, or the term
    /// is zero or longer than [`MAX_TERM_PERIODS`].
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_periods: u32,
    ) -> Result<Self, AmortizeError> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(AmortizeError::InvalidArgument(format!(
                "principal must be a positive amount, got {principal}"
            )));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(AmortizeError::InvalidArgument(format!(
                "annual rate must be zero or positive, got {annual_rate_percent}"
            )));
        }
        if term_periods == 0 {
            return Err(AmortizeError::InvalidArgument(
                "term must be at least one period".to_string(),
            ));
        }
        if term_periods > MAX_TERM_PERIODS {
            return Err(AmortizeError::InvalidArgument(format!(
                "term must be at most {MAX_TERM_PERIODS} periods, got {term_periods}"
            )));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            term_periods,
        })
    }

    #[must_use]
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / f64::from(PERIODS_PER_YEAR)
    }

    /// Level payment that retires the principal in exactly `term_periods`.
    ///
    /// # Errors
    ///
    /// Returns [`AmortizeError::InvalidArgument`] when the term is so long
    /// that the growth factor overflows.
    pub fn periodic_payment(&self) -> Result<f64, AmortizeError> {
        let n = f64::from(self.term_periods);
        let r = self.periodic_rate();
        if r == 0.0 {
            return Ok(self.principal / n);
        }

        let growth = (1.0 + r).powf(n);
        let payment = self.principal * r * growth / (growth - 1.0);
        if payment.is_finite() {
            Ok(payment)
        } else {
            Err(AmortizeError::InvalidArgument(format!(
                "payment overflows for {} periods at {}%",
                self.term_periods, self.annual_rate_percent
            )))
        }
    }

    /// # Errors
    ///
    /// See [`LoanParameters::periodic_payment`].
    pub fn schedule(&self) -> Result<AmortizationSchedule, AmortizeError> {
        let payment = self.periodic_payment()?;
        let r = self.periodic_rate();

        let mut records = Vec::with_capacity(self.term_periods as usize);
        let mut balance = self.principal;
        let mut total_interest = 0.0;

        for period_index in 1..=self.term_periods {
            let interest_portion = balance * r;
            let principal_portion = payment - interest_portion;
            balance = if period_index == self.term_periods {
                0.0
            } else {
                (balance - principal_portion).max(0.0)
            };
            total_interest += interest_portion;

            records.push(PaymentRecord {
                period_index,
                payment_amount: payment,
                principal_portion,
                interest_portion,
                remaining_balance: balance,
            });
        }

        Ok(AmortizationSchedule {
            principal: self.principal,
            periodic_payment: payment,
            total_interest,
            total_paid: self.principal + total_interest,
            records,
        })
    }
}

/// # Errors
///
/// Returns [`AmortizeError::InvalidArgument`] for a non-positive principal,
/// a negative rate, or a zero term.
pub fn compute_periodic_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_periods: u32,
) -> Result<f64, AmortizeError> {
    LoanParameters::new(principal, annual_rate_percent, term_periods)?.periodic_payment()
}

/// # Errors
///
/// Same conditions as [`compute_periodic_payment`].
pub fn build_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_periods: u32,
) -> Result<AmortizationSchedule, AmortizeError> {
    LoanParameters::new(principal, annual_rate_percent, term_periods)?.schedule()
}

impl AmortizationSchedule {
    #[must_use]
    pub fn term_periods(&self) -> usize {
        self.records.len()
    }

    /// Up to the first `n` rows, e.g. the "first 12 months" table.
    #[must_use]
    pub fn first_periods(&self, n: usize) -> &[PaymentRecord] {
        &self.records[..n.min(self.records.len())]
    }

    #[must_use]
    pub fn yearly_summary(&self) -> Vec<YearSummary> {
        self.records
            .chunks(PERIODS_PER_YEAR as usize)
            .zip(1u32..)
            .map(|(rows, year)| YearSummary {
                year,
                principal_paid: rows.iter().map(|r| r.principal_portion).sum(),
                interest_paid: rows.iter().map(|r| r.interest_portion).sum(),
                ending_balance: rows.last().map_or(0.0, |r| r.remaining_balance),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;

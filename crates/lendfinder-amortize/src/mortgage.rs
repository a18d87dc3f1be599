use serde::{Deserialize, Serialize};

use crate::schedule::LoanParameters;
use crate::AmortizeError;

/// Private mortgage insurance, as a fraction of the loan amount per year.
pub const PMI_ANNUAL_RATE: f64 = 0.005;

/// PMI is charged while the down payment is below this share of the price.
pub const PMI_DOWN_PAYMENT_THRESHOLD_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageParameters {
    pub home_price: f64,
    pub down_payment: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub property_tax_annual: f64,
    pub insurance_annual: f64,
    pub association_fee_monthly: f64,
}

/// Monthly cost breakdown. `total_monthly_payment` is the sum of the five
/// monthly components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgagePaymentComposition {
    pub loan_amount: f64,
    pub down_payment_percent: f64,
    pub principal_and_interest: f64,
    pub property_tax_monthly: f64,
    pub insurance_monthly: f64,
    pub mortgage_insurance_monthly: f64,
    pub association_fee_monthly: f64,
    pub total_monthly_payment: f64,
    /// Interest over the full term of the loan itself, add-ons excluded.
    pub total_interest: f64,
}

impl MortgageParameters {
    #[must_use]
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Down payment as a percentage of the home price; `0.0` for a
    /// non-positive price.
    #[must_use]
    pub fn down_payment_percent(&self) -> f64 {
        if self.home_price <= 0.0 {
            return 0.0;
        }
        self.down_payment / self.home_price * 100.0
    }

    #[must_use]
    pub fn requires_mortgage_insurance(&self) -> bool {
        self.down_payment_percent() < PMI_DOWN_PAYMENT_THRESHOLD_PERCENT
    }
}

/// Down payment amount for `percent` of `home_price`, the inverse of
/// [`MortgageParameters::down_payment_percent`].
#[must_use]
pub fn down_payment_for_percent(home_price: f64, percent: f64) -> f64 {
    home_price * percent / 100.0
}

/// # Errors
///
/// Returns [`AmortizeError::InvalidArgument`] when the home price is not
/// positive, the down payment is negative or covers the whole price, an
/// add-on cost is negative, or the loan itself is invalid (see
/// [`LoanParameters::new`]).
pub fn compose_mortgage_payment(
    params: &MortgageParameters,
) -> Result<MortgagePaymentComposition, AmortizeError> {
    if !params.home_price.is_finite() || params.home_price <= 0.0 {
        return Err(AmortizeError::InvalidArgument(format!(
            "home price must be positive, got {}",
            params.home_price
        )));
    }
    if !params.down_payment.is_finite() || params.down_payment < 0.0 {
        return Err(AmortizeError::InvalidArgument(format!(
            "down payment must not be negative, got {}",
            params.down_payment
        )));
    }
    let loan_amount = params.loan_amount();
    if loan_amount <= 0.0 {
        return Err(AmortizeError::InvalidArgument(
            "down payment must be less than the home price".to_string(),
        ));
    }
    for (name, value) in [
        ("property tax", params.property_tax_annual),
        ("insurance", params.insurance_annual),
        ("association fee", params.association_fee_monthly),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AmortizeError::InvalidArgument(format!(
                "{name} must not be negative, got {value}"
            )));
        }
    }

    let term_periods = params.term_years.checked_mul(12).ok_or_else(|| {
        AmortizeError::InvalidArgument(format!("term of {} years is too long", params.term_years))
    })?;
    let schedule =
        LoanParameters::new(loan_amount, params.annual_rate_percent, term_periods)?.schedule()?;

    let principal_and_interest = schedule.periodic_payment;
    let property_tax_monthly = params.property_tax_annual / 12.0;
    let insurance_monthly = params.insurance_annual / 12.0;
    let mortgage_insurance_monthly = if params.requires_mortgage_insurance() {
        loan_amount * PMI_ANNUAL_RATE / 12.0
    } else {
        0.0
    };

    Ok(MortgagePaymentComposition {
        loan_amount,
        down_payment_percent: params.down_payment_percent(),
        principal_and_interest,
        property_tax_monthly,
        insurance_monthly,
        mortgage_insurance_monthly,
        association_fee_monthly: params.association_fee_monthly,
        total_monthly_payment: principal_and_interest
            + property_tax_monthly
            + insurance_monthly
            + mortgage_insurance_monthly
            + params.association_fee_monthly,
        total_interest: schedule.total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(home_price: f64, down_payment: f64) -> MortgageParameters {
        MortgageParameters {
            home_price,
            down_payment,
            annual_rate_percent: 6.5,
            term_years: 30,
            property_tax_annual: 4_800.0,
            insurance_annual: 1_200.0,
            association_fee_monthly: 50.0,
        }
    }

    #[test]
    fn composes_monthly_total_without_pmi_at_twenty_percent() {
        let composition = compose_mortgage_payment(&params(400_000.0, 80_000.0)).unwrap();
        assert!((composition.loan_amount - 320_000.0).abs() < 1e-9);
        assert!((composition.principal_and_interest - 2022.62).abs() < 0.01);
        assert!((composition.property_tax_monthly - 400.0).abs() < 1e-9);
        assert!((composition.insurance_monthly - 100.0).abs() < 1e-9);
        assert_eq!(composition.mortgage_insurance_monthly, 0.0);
        assert!((composition.total_monthly_payment - 2572.62).abs() < 0.01);
    }

    #[test]
    fn pmi_applies_below_twenty_percent_down() {
        let composition = compose_mortgage_payment(&params(400_000.0, 40_000.0)).unwrap();
        assert!((composition.down_payment_percent - 10.0).abs() < 1e-9);
        assert!((composition.mortgage_insurance_monthly - 150.0).abs() < 1e-9);
    }

    #[test]
    fn add_ons_do_not_change_principal_and_interest() {
        let with_add_ons = compose_mortgage_payment(&params(400_000.0, 80_000.0)).unwrap();
        let bare = compose_mortgage_payment(&MortgageParameters {
            property_tax_annual: 0.0,
            insurance_annual: 0.0,
            association_fee_monthly: 0.0,
            ..params(400_000.0, 80_000.0)
        })
        .unwrap();
        assert_eq!(
            with_add_ons.principal_and_interest,
            bare.principal_and_interest
        );
        assert_eq!(with_add_ons.total_interest, bare.total_interest);
    }

    #[test]
    fn rejects_down_payment_covering_price() {
        assert!(compose_mortgage_payment(&params(300_000.0, 300_000.0)).is_err());
        assert!(compose_mortgage_payment(&params(300_000.0, 350_000.0)).is_err());
    }

    #[test]
    fn rejects_negative_add_ons_and_zero_term() {
        let negative_tax = MortgageParameters {
            property_tax_annual: -1.0,
            ..params(300_000.0, 60_000.0)
        };
        assert!(compose_mortgage_payment(&negative_tax).is_err());

        let zero_term = MortgageParameters {
            term_years: 0,
            ..params(300_000.0, 60_000.0)
        };
        assert!(compose_mortgage_payment(&zero_term).is_err());
    }

    #[test]
    fn rejects_term_beyond_one_hundred_years() {
        let longest = MortgageParameters {
            term_years: 100,
            ..params(300_000.0, 60_000.0)
        };
        assert!(compose_mortgage_payment(&longest).is_ok());

        for term_years in [101, u32::MAX / 12, u32::MAX] {
            let too_long = MortgageParameters {
                term_years,
                ..params(300_000.0, 60_000.0)
            };
            assert!(matches!(
                compose_mortgage_payment(&too_long),
                Err(AmortizeError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn down_payment_percent_and_amount_are_inverse() {
        let p = params(350_000.0, 0.0);
        let amount = down_payment_for_percent(p.home_price, 15.0);
        assert!((amount - 52_500.0).abs() < 1e-9);
        let synced = MortgageParameters {
            down_payment: amount,
            ..p
        };
        assert!((synced.down_payment_percent() - 15.0).abs() < 1e-9);
    }
}

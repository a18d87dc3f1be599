//! Loan and mortgage calculator commands.

use lendfinder_amortize::{build_schedule, compose_mortgage_payment, MortgageParameters};
use lendfinder_core::{format_currency, format_number};

const FIRST_PERIODS_SHOWN: usize = 12;

/// Prints the payment, totals, a period table and a per-year summary.
///
/// # Errors
///
/// Returns an error if the loan parameters are invalid.
pub(crate) fn run_loan(
    principal: f64,
    rate: f64,
    term_months: u32,
    full_schedule: bool,
) -> anyhow::Result<()> {
    let schedule = build_schedule(principal, rate, term_months)?;

    println!("Loan amount:      {}", format_currency(principal));
    println!("Interest rate:    {}%", format_number(rate));
    println!("Term:             {term_months} months");
    println!("Monthly payment:  {}", format_currency(schedule.periodic_payment));
    println!("Total interest:   {}", format_currency(schedule.total_interest));
    println!("Total paid:       {}", format_currency(schedule.total_paid));
    println!();

    let rows = if full_schedule {
        schedule.records.as_slice()
    } else {
        schedule.first_periods(FIRST_PERIODS_SHOWN)
    };
    println!(
        "{:<8}{:>14}{:>14}{:>14}{:>16}",
        "PERIOD", "PAYMENT", "PRINCIPAL", "INTEREST", "BALANCE"
    );
    for row in rows {
        println!(
            "{:<8}{:>14}{:>14}{:>14}{:>16}",
            row.period_index,
            format_currency(row.payment_amount),
            format_currency(row.principal_portion),
            format_currency(row.interest_portion),
            format_currency(row.remaining_balance)
        );
    }

    println!();
    println!(
        "{:<6}{:>16}{:>16}{:>16}",
        "YEAR", "PRINCIPAL", "INTEREST", "BALANCE"
    );
    for year in schedule.yearly_summary() {
        println!(
            "{:<6}{:>16}{:>16}{:>16}",
            year.year,
            format_currency(year.principal_paid),
            format_currency(year.interest_paid),
            format_currency(year.ending_balance)
        );
    }

    Ok(())
}

/// Prints the monthly cost breakdown of a mortgage.
///
/// # Errors
///
/// Returns an error if the mortgage parameters are invalid.
pub(crate) fn run_mortgage(params: &MortgageParameters) -> anyhow::Result<()> {
    let composition = compose_mortgage_payment(params)?;

    println!("Home price:          {}", format_currency(params.home_price));
    println!(
        "Down payment:        {} ({}%)",
        format_currency(params.down_payment),
        format_number(composition.down_payment_percent)
    );
    println!("Loan amount:         {}", format_currency(composition.loan_amount));
    println!();
    println!(
        "Principal & interest {:>14}",
        format_currency(composition.principal_and_interest)
    );
    println!(
        "Property tax         {:>14}",
        format_currency(composition.property_tax_monthly)
    );
    println!(
        "Insurance            {:>14}",
        format_currency(composition.insurance_monthly)
    );
    println!(
        "PMI                  {:>14}",
        format_currency(composition.mortgage_insurance_monthly)
    );
    println!(
        "HOA                  {:>14}",
        format_currency(composition.association_fee_monthly)
    );
    println!(
        "Total monthly        {:>14}",
        format_currency(composition.total_monthly_payment)
    );
    println!();
    println!(
        "Total interest over {} years: {}",
        params.term_years,
        format_currency(composition.total_interest)
    );

    Ok(())
}

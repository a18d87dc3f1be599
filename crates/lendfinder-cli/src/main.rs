mod calculators;
mod search;
mod states;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lendfinder-cli")]
#[command(about = "Loan calculators and lender store search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Monthly payment and amortization schedule for a fixed-rate loan
    Loan {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent (e.g. 7.5)
        #[arg(long)]
        rate: f64,
        /// Term in months
        #[arg(long, default_value = "60")]
        term_months: u32,
        /// Print every period instead of the first twelve
        #[arg(long)]
        full_schedule: bool,
    },
    /// Monthly cost of a mortgage including tax, insurance, PMI and HOA
    Mortgage {
        #[arg(long)]
        home_price: f64,
        /// Down payment amount; overrides --down-percent
        #[arg(long)]
        down_payment: Option<f64>,
        /// Down payment as a percent of the home price
        #[arg(long, default_value = "20")]
        down_percent: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value = "30")]
        term_years: u32,
        /// Annual property tax
        #[arg(long, default_value = "0")]
        property_tax: f64,
        /// Annual homeowners insurance
        #[arg(long, default_value = "0")]
        insurance: f64,
        /// Monthly HOA fee
        #[arg(long, default_value = "0")]
        hoa: f64,
    },
    /// Search for lender storefronts near a location
    Search {
        /// Free-text location, e.g. "Philadelphia, PA"
        #[arg(long, conflicts_with = "zip", required_unless_present = "zip")]
        location: Option<String>,
        /// Postal code
        #[arg(long)]
        zip: Option<String>,
        /// Service slug (e.g. payday-loans)
        #[arg(long, default_value = "payday-loans")]
        service: String,
        /// Search radius in miles
        #[arg(long)]
        distance: Option<u32>,
        /// Print the raw outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List location hubs, or the cities of one state
    States {
        /// State name or abbreviation
        state: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = lendfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Loan {
            principal,
            rate,
            term_months,
            full_schedule,
        }) => calculators::run_loan(principal, rate, term_months, full_schedule)?,
        Some(Commands::Mortgage {
            home_price,
            down_payment,
            down_percent,
            rate,
            term_years,
            property_tax,
            insurance,
            hoa,
        }) => {
            let down_payment = down_payment.unwrap_or_else(|| {
                lendfinder_amortize::down_payment_for_percent(home_price, down_percent)
            });
            calculators::run_mortgage(&lendfinder_amortize::MortgageParameters {
                home_price,
                down_payment,
                annual_rate_percent: rate,
                term_years,
                property_tax_annual: property_tax,
                insurance_annual: insurance,
                association_fee_monthly: hoa,
            })?;
        }
        Some(Commands::Search {
            location,
            zip,
            service,
            distance,
            json,
        }) => {
            search::run_search(
                &config,
                search::SearchArgs {
                    location,
                    zip,
                    service,
                    distance,
                    json,
                },
            )
            .await?;
        }
        Some(Commands::States { state }) => states::run_states(&config, state.as_deref())?,
        None => println!("lendfinder-cli: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;

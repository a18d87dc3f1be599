//! `search` command: one store search against the configured provider.

use lendfinder_core::AppConfig;
use lendfinder_locator::{
    search_stores, LocationInput, LocationQuery, LocatorError, PlacesClient, SearchOutcome,
};

pub(crate) struct SearchArgs {
    pub location: Option<String>,
    pub zip: Option<String>,
    pub service: String,
    pub distance: Option<u32>,
    pub json: bool,
}

/// Runs a store search and prints the ranked stores.
///
/// # Errors
///
/// Returns an error if no provider token is configured, neither a location
/// nor a postal code is given, or the provider call fails.
pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let client = PlacesClient::from_config(config)?.ok_or(LocatorError::NotConfigured)?;

    let location = match (args.zip, args.location) {
        (Some(zip), _) => LocationInput::PostalCode(zip),
        (None, Some(text)) => LocationInput::FreeText(text),
        (None, None) => anyhow::bail!("either --location or --zip is required"),
    };
    let query = LocationQuery {
        location,
        service_category: args.service,
        radius_miles: args.distance,
    };

    tracing::info!(
        service = %query.service_category,
        max_results = config.max_results,
        "running store search"
    );
    let outcome = search_stores(&client, &query, config.max_results).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    let filters = &outcome.applied_filters;
    println!(
        "search: {} (state: {}, city: {}, zip: {})",
        outcome.search_location,
        filters.state.as_deref().unwrap_or("-"),
        filters.city.as_deref().unwrap_or("-"),
        filters.zip_code.as_deref().unwrap_or("-"),
    );
    println!(
        "{} of {} matching stores ({} raw results)",
        outcome.stores.len(),
        outcome.total_before_truncation,
        outcome.raw_result_count
    );

    if outcome.stores.is_empty() {
        println!("no stores found; try a nearby city or another service");
        return;
    }

    println!();
    println!("{:<6}{:<8}{:<36}ADDRESS", "RATING", "REVIEWS", "NAME");
    for store in &outcome.stores {
        let name = if store.name.chars().count() > 34 {
            format!("{}...", store.name.chars().take(31).collect::<String>())
        } else {
            store.name.clone()
        };
        println!(
            "{:<6.1}{:<8}{:<36}{}",
            store.rating, store.review_count, name, store.address
        );
    }
}

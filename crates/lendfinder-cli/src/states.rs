use lendfinder_core::{format_number, load_cities, location_page_slug, AppConfig, HubIndex};

/// Lists hubs by population, or the cities of one state with their
/// landing-page slugs for the default service.
///
/// # Errors
///
/// Returns an error if the cities file cannot be read or the state has no hub.
pub(crate) fn run_states(config: &AppConfig, state: Option<&str>) -> anyhow::Result<()> {
    let index = HubIndex::from_cities(load_cities(&config.cities_path)?);

    let Some(state) = state else {
        if index.is_empty() {
            println!("no cities in {}", config.cities_path.display());
            return Ok(());
        }
        println!("{:<6}{:<24}{:>8}{:>16}", "ABBR", "STATE", "CITIES", "POPULATION");
        for hub in index.states_by_population() {
            println!(
                "{:<6}{:<24}{:>8}{:>16}",
                hub.state_abbr,
                hub.state,
                hub.city_count,
                format_number(hub.total_population as f64)
            );
        }
        return Ok(());
    };

    let hub = index
        .hub(state)
        .ok_or_else(|| anyhow::anyhow!("no location hub for state '{state}'"))?;

    println!(
        "{} ({}): {} cities, population {}",
        hub.state,
        hub.state_abbr,
        hub.city_count,
        format_number(hub.total_population as f64)
    );
    println!("{:<24}{:>14}  PAGE", "CITY", "POPULATION");
    for city in index.cities_for_state(state) {
        println!(
            "{:<24}{:>14}  /locations/{}",
            city.city,
            format_number(city.population as f64),
            location_page_slug("payday-loans", &city.city, &city.state_abbr)
        );
    }

    Ok(())
}

//! Location-hub dataset: the curated city list that backs per-state landing
//! pages, grouped by state.
//!
//! The source file is a fully quoted CSV with a header row:
//! `"city","state","state_abbr","slug","population","priority"`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::states::lookup_state;
use crate::ConfigError;

static QUOTED_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("valid regex"));

/// Priority assigned when the CSV column is blank or unparseable.
const DEFAULT_PRIORITY: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub city: String,
    pub state: String,
    pub state_abbr: String,
    pub slug: String,
    pub population: u64,
    pub priority: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateHub {
    pub state: String,
    pub state_abbr: String,
    /// Sorted by population, largest first.
    pub cities: Vec<CityRecord>,
    pub total_population: u64,
    pub city_count: usize,
}

/// Cities grouped by upper-case state abbreviation.
#[derive(Debug, Clone, Default)]
pub struct HubIndex {
    hubs: BTreeMap<String, StateHub>,
}

/// Reads and parses the cities CSV at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::CitiesFileIo`] if the file cannot be read.
pub fn load_cities(path: &Path) -> Result<Vec<CityRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CitiesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_cities_csv(&content))
}

/// Parses the quoted cities CSV. The first non-blank line is the header.
/// Rows with fewer than six quoted fields, or without a city or state
/// abbreviation, are skipped.
#[must_use]
pub fn parse_cities_csv(content: &str) -> Vec<CityRecord> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .skip(1)
        .filter_map(parse_city_line)
        .collect()
}

fn parse_city_line(line: &str) -> Option<CityRecord> {
    let fields: Vec<&str> = QUOTED_FIELD
        .captures_iter(line)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim()))
        .collect();
    if fields.len() < 6 {
        return None;
    }

    let city = fields[0];
    let state_abbr = fields[2];
    if city.is_empty() || state_abbr.is_empty() {
        return None;
    }

    Some(CityRecord {
        city: city.to_string(),
        state: fields[1].to_string(),
        state_abbr: state_abbr.to_uppercase(),
        slug: fields[3].to_string(),
        population: fields[4].parse().unwrap_or(0),
        priority: fields[5].parse().unwrap_or(DEFAULT_PRIORITY),
    })
}

impl HubIndex {
    #[must_use]
    pub fn from_cities(cities: Vec<CityRecord>) -> Self {
        let mut hubs: BTreeMap<String, StateHub> = BTreeMap::new();
        for city in cities {
            let abbr = city.state_abbr.to_uppercase();
            let hub = hubs.entry(abbr.clone()).or_insert_with(|| StateHub {
                state: city.state.clone(),
                state_abbr: abbr,
                cities: Vec::new(),
                total_population: 0,
                city_count: 0,
            });
            hub.total_population += city.population;
            hub.city_count += 1;
            hub.cities.push(city);
        }
        for hub in hubs.values_mut() {
            hub.cities.sort_by(|a, b| b.population.cmp(&a.population));
        }
        Self { hubs }
    }

    /// Looks up a hub by state name or abbreviation.
    #[must_use]
    pub fn hub(&self, state_input: &str) -> Option<&StateHub> {
        self.hubs.get(&hub_key(state_input))
    }

    /// Cities for a state, or an empty slice when the state has no hub.
    #[must_use]
    pub fn cities_for_state(&self, state_input: &str) -> &[CityRecord] {
        self.hub(state_input).map_or(&[], |hub| hub.cities.as_slice())
    }

    /// All hubs, most populous first.
    #[must_use]
    pub fn states_by_population(&self) -> Vec<&StateHub> {
        let mut hubs: Vec<&StateHub> = self.hubs.values().collect();
        hubs.sort_by(|a, b| b.total_population.cmp(&a.total_population));
        hubs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}

/// Two-letter input is taken as an abbreviation; known names map to their
/// abbreviation; anything else is upper-cased and will not match a hub
/// unless the dataset used the same spelling.
fn hub_key(state_input: &str) -> String {
    let trimmed = state_input.trim();
    if trimmed.len() == 2 {
        return trimmed.to_uppercase();
    }
    lookup_state(trimmed).map_or_else(|| trimmed.to_uppercase(), |s| s.abbr.to_string())
}

/// URL slug for a service/city landing page:
/// `("payday-loans", "St. Louis", "MO")` → `"payday-loans-in-st-louis-mo"`.
#[must_use]
pub fn location_page_slug(service_slug: &str, city: &str, state_abbr: &str) -> String {
    let mut city_slug = String::with_capacity(city.len());
    for ch in city.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            city_slug.push(ch);
        } else if !city_slug.ends_with('-') {
            city_slug.push('-');
        }
    }
    let city_slug = city_slug.trim_matches('-');
    format!(
        "{service_slug}-in-{city_slug}-{}",
        state_abbr.trim().to_lowercase()
    )
}

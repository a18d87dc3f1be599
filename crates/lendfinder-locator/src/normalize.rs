//! Normalization from untrusted provider place records to [`Store`].
//!
//! Provider payloads are not contractually fixed, so every field is probed
//! across a list of known aliases and every access tolerates a missing or
//! mistyped value.

use std::collections::BTreeMap;

use lendfinder_core::services::service_labels;
use lendfinder_core::{Coordinates, ServiceCategory, Store};
use serde_json::Value;

const NAME_KEYS: [&str; 2] = ["title", "name"];
const STREET_KEYS: [&str; 2] = ["address", "street"];
const ZIP_KEYS: [&str; 3] = ["postalCode", "zipCode", "postal_code"];
const PHONE_KEYS: [&str; 2] = ["phone", "phoneUnformatted"];
const RATING_KEYS: [&str; 3] = ["totalScore", "rating", "total_score"];
const REVIEW_COUNT_KEYS: [&str; 3] = ["reviewsCount", "reviews_count", "reviewCount"];
const PLACE_ID_KEYS: [&str; 3] = ["placeId", "place_id", "id"];
const HOURS_KEYS: [&str; 2] = ["openingHours", "opening_hours"];

const UNKNOWN_STORE_NAME: &str = "Unknown Store";

/// Maps one provider record to a [`Store`]. Never panics.
///
/// `index` is the record's position in the response and stands in for the
/// identifier when the provider sent none. `service_category` moves the
/// matching service label to the front when present.
#[must_use]
pub fn normalize_place_record(record: &Value, service_category: &str, index: usize) -> Store {
    let street = text_field(record, &STREET_KEYS);
    let city = text_field(record, &["city"]);
    let state = text_field(record, &["state"]);
    let zip_code = text_field(record, &ZIP_KEYS);

    let place_id = text_field(record, &PLACE_ID_KEYS);
    let id = if place_id.is_empty() {
        format!("store-{index}")
    } else {
        format!("store-{place_id}")
    };

    let name = text_field(record, &NAME_KEYS);

    Store {
        id,
        name: if name.is_empty() {
            UNKNOWN_STORE_NAME.to_string()
        } else {
            name
        },
        address: compose_address(&street, &city, &state, &zip_code),
        phone: text_field(record, &PHONE_KEYS),
        coordinates: coordinates(record),
        services: service_labels(
            &categories(record),
            ServiceCategory::from_slug(service_category),
        ),
        hours: opening_hours(record),
        rating: RATING_KEYS
            .iter()
            .find_map(|k| record.get(*k).and_then(number_value).filter(|n| *n != 0.0))
            .unwrap_or(0.0),
        review_count: REVIEW_COUNT_KEYS
            .iter()
            .find_map(|k| record.get(*k).and_then(count_value).filter(|n| *n != 0))
            .unwrap_or(0),
        website: text_field(record, &["website"]),
        place_id,
        url: text_field(record, &["url"]),
        city,
        state,
        zip_code,
    }
}

/// First alias holding a non-blank string or a number, trimmed.
fn text_field(record: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

fn number_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn count_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// `location: {lat, lng}` first, then flat `lat`/`lng`, then flat
/// `latitude`/`longitude`. Each axis is resolved on its own and defaults to 0.
fn coordinates(record: &Value) -> Coordinates {
    let nested = record.get("location");
    let axis = |nested_key: &str, flat_keys: [&str; 2]| {
        nested
            .and_then(|loc| loc.get(nested_key))
            .and_then(number_value)
            .or_else(|| {
                flat_keys
                    .iter()
                    .find_map(|k| record.get(*k).and_then(number_value))
            })
            .unwrap_or(0.0)
    };

    Coordinates {
        lat: axis("lat", ["lat", "latitude"]),
        lng: axis("lng", ["lng", "longitude"]),
    }
}

fn categories(record: &Value) -> Vec<String> {
    match record.get("categories") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => record
            .get("categoryName")
            .and_then(Value::as_str)
            .map(|s| vec![s.to_string()])
            .unwrap_or_default(),
    }
}

/// `[{day, hours}]` entries; malformed entries are skipped.
fn opening_hours(record: &Value) -> BTreeMap<String, String> {
    let Some(entries) = HOURS_KEYS
        .iter()
        .find_map(|k| record.get(*k).and_then(Value::as_array))
    else {
        return BTreeMap::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let day = entry.get("day")?.as_str()?.trim();
            let hours = entry.get("hours")?.as_str()?.trim();
            (!day.is_empty()).then(|| (day.to_string(), hours.to_string()))
        })
        .collect()
}

/// `"{street}, {city}, {state} {zip}"` when street, city and state are all
/// known; `"{city}, {state}"` when only the street is missing; otherwise the
/// street as given, which may be empty.
fn compose_address(street: &str, city: &str, state: &str, zip: &str) -> String {
    if !street.is_empty() && !city.is_empty() && !state.is_empty() {
        let mut address = format!("{street}, {city}, {state}");
        if !zip.is_empty() {
            address.push(' ');
            address.push_str(zip);
        }
        return address;
    }
    if street.is_empty() && !city.is_empty() && !state.is_empty() {
        return format!("{city}, {state}");
    }
    street.to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

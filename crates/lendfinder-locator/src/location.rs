//! Best-effort parsing of user-entered locations.
//!
//! Free text has no grammar, so an input like `"Springfield"` simply yields
//! no structured target; the search still runs, unfiltered.

use lendfinder_core::states::{find_state_mention, lookup_state};

use crate::error::LocatorError;
use crate::types::{LocationInput, ParsedLocation};

const COUNTRY_TOKENS: [&str; 3] = ["US", "USA", "UNITED STATES"];

/// Derives the provider search string and optional state/city targets.
///
/// - Postal code: used as the search string; no targets.
/// - `"City, State"` or `"City, State, USA"`: city is the first part, state
///   the last part (second to last when the last is a country token). The
///   state is kept only when it resolves to a known US state.
/// - Single part: a state name or upper-case abbreviation anywhere in the
///   text becomes the target state.
///
/// # Errors
///
/// Returns [`LocatorError::InvalidInput`] when the input is blank.
pub fn parse_location_input(input: &LocationInput) -> Result<ParsedLocation, LocatorError> {
    match input {
        LocationInput::PostalCode(code) => {
            let code = code.trim();
            if code.is_empty() {
                return Err(LocatorError::InvalidInput(
                    "postal code must not be empty".to_string(),
                ));
            }
            Ok(ParsedLocation {
                search_location: code.to_string(),
                ..ParsedLocation::default()
            })
        }
        LocationInput::FreeText(text) => parse_free_text(text),
    }
}

fn parse_free_text(text: &str) -> Result<ParsedLocation, LocatorError> {
    let search_location = text.trim();
    if search_location.is_empty() {
        return Err(LocatorError::InvalidInput(
            "location must not be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = search_location
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let (target_state, target_city) = if parts.len() >= 2 {
        let last = parts[parts.len() - 1];
        let is_country = COUNTRY_TOKENS
            .iter()
            .any(|token| token.eq_ignore_ascii_case(last));
        let state_part = if is_country && parts.len() >= 3 {
            parts[parts.len() - 2]
        } else {
            last
        };
        (
            lookup_state(state_part).map(|s| s.name.to_string()),
            Some(parts[0].to_string()),
        )
    } else {
        (
            find_state_mention(search_location).map(|s| s.name.to_string()),
            None,
        )
    };

    Ok(ParsedLocation {
        search_location: search_location.to_string(),
        target_state,
        target_city,
    })
}

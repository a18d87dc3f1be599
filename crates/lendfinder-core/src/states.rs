//! Static US state name / abbreviation table.
//!
//! Used to normalize free-text location input and to compare against the
//! state fields returned by place-search providers, which arrive as either a
//! full name (`"Pennsylvania"`) or a postal abbreviation (`"PA"`).

use std::sync::LazyLock;

use regex::Regex;

/// One row of the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub name: &'static str,
    pub abbr: &'static str,
}

const fn state(name: &'static str, abbr: &'static str) -> UsState {
    UsState { name, abbr }
}

/// The 50 states plus the District of Columbia.
pub const US_STATES: [UsState; 51] = [
    state("Alabama", "AL"),
    state("Alaska", "AK"),
    state("Arizona", "AZ"),
    state("Arkansas", "AR"),
    state("California", "CA"),
    state("Colorado", "CO"),
    state("Connecticut", "CT"),
    state("Delaware", "DE"),
    state("District of Columbia", "DC"),
    state("Florida", "FL"),
    state("Georgia", "GA"),
    state("Hawaii", "HI"),
    state("Idaho", "ID"),
    state("Illinois", "IL"),
    state("Indiana", "IN"),
    state("Iowa", "IA"),
    state("Kansas", "KS"),
    state("Kentucky", "KY"),
    state("Louisiana", "LA"),
    state("Maine", "ME"),
    state("Maryland", "MD"),
    state("Massachusetts", "MA"),
    state("Michigan", "MI"),
    state("Minnesota", "MN"),
    state("Mississippi", "MS"),
    state("Missouri", "MO"),
    state("Montana", "MT"),
    state("Nebraska", "NE"),
    state("Nevada", "NV"),
    state("New Hampshire", "NH"),
    state("New Jersey", "NJ"),
    state("New Mexico", "NM"),
    state("New York", "NY"),
    state("North Carolina", "NC"),
    state("North Dakota", "ND"),
    state("Ohio", "OH"),
    state("Oklahoma", "OK"),
    state("Oregon", "OR"),
    state("Pennsylvania", "PA"),
    state("Rhode Island", "RI"),
    state("South Carolina", "SC"),
    state("South Dakota", "SD"),
    state("Tennessee", "TN"),
    state("Texas", "TX"),
    state("Utah", "UT"),
    state("Vermont", "VT"),
    state("Virginia", "VA"),
    state("Washington", "WA"),
    state("West Virginia", "WV"),
    state("Wisconsin", "WI"),
    state("Wyoming", "WY"),
];

/// Matches a state mention inside free text. Full names match in any case;
/// abbreviations only in upper case so that words like "in" or "me" do not
/// register as Indiana or Maine.
static STATE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = US_STATES.iter().map(|s| s.name).collect();
    // Longest first so "West Virginia" wins over "Virginia" at the same offset.
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let names = names.join("|");
    let abbrs = US_STATES
        .iter()
        .map(|s| s.abbr)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:(?i:{names})|(?:{abbrs}))\b")).expect("valid regex")
});

/// Looks up a state by full name or abbreviation, ignoring case and
/// surrounding whitespace.
#[must_use]
pub fn lookup_state(input: &str) -> Option<&'static UsState> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    US_STATES.iter().find(|s| {
        s.abbr.eq_ignore_ascii_case(trimmed) || s.name.eq_ignore_ascii_case(trimmed)
    })
}

/// Finds the first state mentioned anywhere in `text`.
///
/// A text that is exactly an abbreviation in any case (`"ca"`) also matches.
#[must_use]
pub fn find_state_mention(text: &str) -> Option<&'static UsState> {
    if let Some(found) = lookup_state(text) {
        return Some(found);
    }
    STATE_MENTION
        .find(text)
        .and_then(|m| lookup_state(m.as_str()))
}

/// Converts a state abbreviation or name to its canonical full name.
///
/// Unknown input is returned title-cased (`"puerto rico"` → `"Puerto Rico"`).
#[must_use]
pub fn normalize_state_name(input: &str) -> String {
    match lookup_state(input) {
        Some(found) => found.name.to_string(),
        None => title_case(input.trim()),
    }
}

/// Converts a state name or abbreviation to its two-letter abbreviation.
///
/// Unknown input falls back to its first two characters upper-cased, which
/// keeps vendor values like `"Ont."` comparable without matching a US state.
#[must_use]
pub fn state_abbreviation(input: &str) -> String {
    match lookup_state(input) {
        Some(found) => found.abbr.to_string(),
        None => input.trim().chars().take(2).collect::<String>().to_uppercase(),
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

use once_cell::sync::Lazy;
use regex::Regex;

static COUNTRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]*$").expect("country pattern is valid"));

/// Letters and whitespace only. The empty string is accepted; the save gate
/// only fires on dirty drafts, so an untouched empty country never commits.
pub fn country_is_valid(country: &str) -> bool {
    COUNTRY_PATTERN.is_match(country)
}

/// Non-empty after trimming whitespace.
pub fn description_is_valid(description: &str) -> bool {
    !description.trim().is_empty()
}

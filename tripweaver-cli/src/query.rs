//! Heuristic free-text query parsing.
//!
//! Turns a travel request like "3 days in Paris visiting museums and parks"
//! into a [`ParsedTripRequest`]: categories via alias token matching, a day
//! count preferring phrases like "3 days" over bare numbers, and a required
//! city extracted from prepositional phrases. Detected categories are
//! [`Explicit`](CategoryPreference::Explicit) — the parser never invents a
//! default category, because explicitness drives allocation strictness
//! downstream.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tripweaver_core::{Category, CategoryPreference, ParsedTripRequest};

/// Alias tokens mapped to canonical categories.
const CATEGORY_ALIASES: [(&str, &[&str]); 5] = [
    ("museum", &["museum", "museums", "gallery", "galleries", "art"]),
    ("park", &["park", "parks", "parkland"]),
    (
        "landmark",
        &["landmark", "landmarks", "sight", "sights", "sightseeing"],
    ),
    (
        "food",
        &[
            "food",
            "restaurant",
            "restaurants",
            "eat",
            "eating",
            "cafe",
            "cafes",
            "cuisine",
            "dining",
            "bar",
            "bars",
        ],
    ),
    ("shopping", &["shopping", "shop", "shops", "market", "markets"]),
];

/// Common city aliases folded onto the canonical dataset key.
const CITY_ALIASES: [(&str, &str); 3] = [
    ("nyc", "New York"),
    ("new york city", "New York"),
    ("sf", "San Francisco"),
];

/// Errors raised while parsing a free-text query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No city phrase was found. The request cannot proceed without one.
    #[error("no city detected in query {query:?}; phrase it like 'in <City>' or 'to <City>'")]
    NoCityDetected {
        /// The offending query text.
        query: String,
    },
}

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static DAY_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*(?:days?|d)\b").expect("valid pattern"));

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\b").expect("valid pattern"));

#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static CITY_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:in|to|at|near|around|for)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")
        .expect("valid pattern")
});

/// Parse a free-text trip query into a [`ParsedTripRequest`].
///
/// # Errors
/// Returns [`QueryError::NoCityDetected`] when no city phrase is present.
///
/// # Examples
/// ```
/// use tripweaver_cli::parse_query;
///
/// let request = parse_query("3 days in Paris visiting museums").expect("city present");
/// assert_eq!(request.city(), "Paris");
/// assert_eq!(request.days(), 3);
/// ```
pub fn parse_query(query: &str) -> Result<ParsedTripRequest, QueryError> {
    let trimmed = query.trim();

    let categories = detect_categories(trimmed);
    let preference = if categories.is_empty() {
        CategoryPreference::Unspecified
    } else {
        CategoryPreference::Explicit(categories)
    };

    let days = detect_days(trimmed);
    let city = detect_city(trimmed).ok_or_else(|| QueryError::NoCityDetected {
        query: trimmed.to_owned(),
    })?;

    Ok(ParsedTripRequest::new(trimmed, city, days, preference))
}

/// Fold a raw city mention onto the canonical dataset key.
///
/// Known aliases map to their canonical form; anything else is title-cased.
#[must_use]
pub fn canonical_city(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    for (alias, canonical) in CITY_ALIASES {
        if key == alias {
            return canonical.to_owned();
        }
    }
    title_case(raw.trim())
}

fn detect_categories(query: &str) -> Vec<Category> {
    let mut found = Vec::new();
    for token in query.split(|ch: char| !ch.is_ascii_alphabetic()) {
        if token.is_empty() {
            continue;
        }
        let lowered = token.to_lowercase();
        for (canonical, aliases) in CATEGORY_ALIASES {
            if aliases.contains(&lowered.as_str()) {
                let category = Category::from(canonical);
                if !found.contains(&category) {
                    found.push(category);
                }
                break;
            }
        }
    }
    found
}

/// Prefer "3 days" style phrases; fall back to the first standalone number;
/// default to a single day. Always at least one.
fn detect_days(query: &str) -> usize {
    DAY_PHRASE
        .captures(query)
        .or_else(|| BARE_NUMBER.captures(query))
        .and_then(|capture| capture.get(1))
        .and_then(|group| group.as_str().parse::<usize>().ok())
        .map_or(1, |days| days.max(1))
}

fn detect_city(query: &str) -> Option<String> {
    let raw = CITY_PHRASE.captures(query)?.get(1)?.as_str();
    Some(canonical_city(raw))
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

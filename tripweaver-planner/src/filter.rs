//! Catalog filtering and popularity ranking.

use std::cmp::Ordering;

use log::debug;
use tripweaver_core::{CategoryPreference, Poi, PoiTable};

/// Produce a ranked candidate list for a city and category preference.
///
/// City matching is a case-insensitive substring match so dataset variants
/// like "New York City" still answer a request for "New York"; callers
/// canonicalise common aliases before calling. When the category restriction
/// matches nothing — or no categories were supplied — the filter degrades to
/// the unfiltered city-scoped set rather than returning empty. Callers that
/// need strict-only behaviour must consult
/// [`CategoryPreference::is_explicit`] themselves.
///
/// Ordering is a hard contract: popularity descending, ties broken by price
/// ascending with missing prices last, truncated to `limit`.
#[must_use]
pub fn filter_catalog<'a>(
    table: &'a PoiTable,
    city: &str,
    preference: &CategoryPreference,
    limit: usize,
) -> Vec<&'a Poi> {
    let city_key = city.trim().to_lowercase();
    let city_scoped: Vec<&Poi> = table
        .iter()
        .filter(|poi| poi.city.to_lowercase().contains(&city_key))
        .collect();

    let categories = preference.categories();
    let mut candidates = if categories.is_empty() {
        city_scoped
    } else {
        let narrowed: Vec<&Poi> = city_scoped
            .iter()
            .copied()
            .filter(|poi| categories.contains(&poi.category))
            .collect();
        if narrowed.is_empty() {
            debug!(
                "category filter {categories:?} matched nothing in {city:?}; \
                 broadening to the full city set"
            );
            city_scoped
        } else {
            narrowed
        }
    };

    rank_by_popularity(&mut candidates);
    candidates.truncate(limit);
    candidates
}

/// The category-free variant: the most popular POIs in a city.
///
/// Used for the day allocator's supplemental backfill pull.
#[must_use]
pub fn top_popular<'a>(table: &'a PoiTable, city: &str, limit: usize) -> Vec<&'a Poi> {
    filter_catalog(table, city, &CategoryPreference::Unspecified, limit)
}

fn rank_by_popularity(candidates: &mut [&Poi]) {
    candidates.sort_by(|a, b| {
        b.popularity
            .total_cmp(&a.popularity)
            .then_with(|| price_order(a.price, b.price))
    });
}

// Missing prices sort after any concrete price.
fn price_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(lhs), Some(rhs)) => lhs.total_cmp(&rhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

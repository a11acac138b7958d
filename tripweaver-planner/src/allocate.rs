//! Deterministic partitioning of selected places across days.

use std::collections::HashSet;

use log::debug;
use tripweaver_core::{DayPlan, Place, Poi};

/// Partition `places` across `day_count` days under `per_day_cap`.
///
/// The selection is truncated to `day_count * per_day_cap` before any
/// allocation happens, so the hard cap holds by construction. Two regimes:
///
/// - **Even distribution** (the default): places are dealt out in their
///   incoming, already-ranked order; the remainder of the integer division
///   goes one extra place each to the first days.
/// - **Backfill**: only when the category preference was explicit, fewer
///   places survived strict filtering than there are days, and more than one
///   day was requested. The available places cover the first
///   `day_count - 1` days and the final day is reserved for a supplemental
///   pull from `backfill` — the city-wide popularity ranking — skipping any
///   place name already used (case-insensitive).
///
/// Every returned day has an index in `1..=day_count`; an empty place list
/// is valid.
#[must_use]
pub fn allocate_days(
    places: Vec<Place>,
    day_count: usize,
    per_day_cap: usize,
    explicit_categories: bool,
    backfill: &[&Poi],
) -> Vec<DayPlan> {
    if day_count == 0 {
        return Vec::new();
    }
    let mut pool = places;
    pool.truncate(day_count.saturating_mul(per_day_cap));

    if explicit_categories && pool.len() < day_count && day_count > 1 {
        debug!(
            "only {} places for {} days under an explicit category filter; \
             reserving the last day for a popularity backfill",
            pool.len(),
            day_count
        );
        allocate_with_backfill(pool, day_count, backfill)
    } else {
        spread_evenly(pool, day_count, 1)
    }
}

/// Largest-remainder day sizing: `total / days` everywhere, with the
/// remainder handed out one place at a time starting from the first day.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "day sizing is integer division with an explicit remainder rule"
)]
fn day_sizes(total: usize, days: usize) -> Vec<usize> {
    let base = total / days;
    let remainder = total % days;
    (0..days)
        .map(|day| base + usize::from(day < remainder))
        .collect()
}

fn spread_evenly(places: Vec<Place>, days: usize, first_day: usize) -> Vec<DayPlan> {
    let sizes = day_sizes(places.len(), days);
    let mut remaining = places.into_iter();
    sizes
        .into_iter()
        .enumerate()
        .map(|(offset, size)| {
            DayPlan::new(first_day + offset, remaining.by_ref().take(size).collect())
        })
        .collect()
}

#[expect(
    clippy::integer_division,
    reason = "the backfill pull size follows the per-day base of the head days"
)]
fn allocate_with_backfill(
    places: Vec<Place>,
    day_count: usize,
    backfill: &[&Poi],
) -> Vec<DayPlan> {
    // Caller guarantees day_count > 1.
    let head_days = day_count - 1;
    let pull = (places.len() / head_days).max(1);

    let mut used: HashSet<String> = places
        .iter()
        .map(|place| place.name.to_lowercase())
        .collect();
    let mut days = spread_evenly(places, head_days, 1);

    let mut supplemental = Vec::with_capacity(pull);
    for poi in backfill {
        if supplemental.len() == pull {
            break;
        }
        if used.insert(poi.name.to_lowercase()) {
            supplemental.push(Place::from_poi(poi));
        }
    }
    days.push(DayPlan::new(day_count, supplemental));
    days
}

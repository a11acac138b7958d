//! One-shot greedy selection over a ranked candidate list.

use tripweaver_core::{ParsedTripRequest, Poi, Scorer};

/// Order candidates by score descending and take the first `needed`.
///
/// Each candidate is scored exactly once. The sort is stable, so candidates
/// with equal scores keep their catalog-filter order. There is no
/// backtracking and no re-scoring after partial selection.
#[must_use]
pub fn select_greedy<'a>(
    candidates: &[&'a Poi],
    scorer: &dyn Scorer,
    request: &ParsedTripRequest,
    needed: usize,
) -> Vec<&'a Poi> {
    let mut scored: Vec<(f64, &Poi)> = candidates
        .iter()
        .map(|poi| (scorer.score(poi, request), *poi))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(needed).map(|(_, poi)| poi).collect()
}

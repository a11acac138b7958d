//! The default relevance scorer.

use tripweaver_core::{ParsedTripRequest, Poi, Scorer};

/// Flat bonus applied when a POI's category matches a requested category.
pub const CATEGORY_MATCH_BONUS: f64 = 0.2;

/// Popularity plus a flat category-match bonus.
///
/// The base score is the popularity as loaded — deliberately not
/// renormalised — and the only other signal is a [`CATEGORY_MATCH_BONUS`]
/// when the POI's category equals any requested category
/// (case-insensitively, via the canonical [`Category`] form). Price and
/// distance do not participate.
///
/// [`Category`]: tripweaver_core::Category
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryBoostScorer;

impl Scorer for CategoryBoostScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance scoring adds a flat bonus to the popularity signal"
    )]
    fn score(&self, poi: &Poi, request: &ParsedTripRequest) -> f64 {
        let mut score = poi.popularity;
        if request
            .preference()
            .categories()
            .iter()
            .any(|category| *category == poi.category)
        {
            score += CATEGORY_MATCH_BONUS;
        }
        score
    }
}

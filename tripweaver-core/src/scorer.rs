//! Score points of interest for a parsed trip request.

use crate::{ParsedTripRequest, Poi};

/// Calculate a relevance score for a point of interest.
///
/// Higher scores indicate a better match between the POI and the request.
/// Implementations must be thread-safe (`Send` + `Sync`) so a scorer can be
/// shared across concurrent requests, and must be deterministic for a given
/// (POI, request) pair — the greedy selector relies on stable ordering.
///
/// # Examples
///
/// ```rust
/// use tripweaver_core::{
///     Category, CategoryPreference, ParsedTripRequest, Poi, Scorer,
/// };
///
/// struct PopularityScorer;
///
/// impl Scorer for PopularityScorer {
///     fn score(&self, poi: &Poi, _request: &ParsedTripRequest) -> f64 {
///         poi.popularity
///     }
/// }
///
/// let poi = Poi::new("Paris", "Louvre", "France", Category::Museum, 9.4);
/// let request =
///     ParsedTripRequest::new("museums in Paris", "Paris", 1, CategoryPreference::Unspecified);
/// assert_eq!(PopularityScorer.score(&poi, &request), 9.4);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `poi` under `request`.
    fn score(&self, poi: &Poi, request: &ParsedTripRequest) -> f64;
}

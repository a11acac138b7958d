//! The TripWeaver planning pipeline.
//!
//! Wires the retrieval-scoring-allocation stages together: catalog filter →
//! greedy selection → day allocation, followed by optional description
//! enrichment and an optional explanation. The pipeline is single-threaded
//! and synchronous; the only shared state is the injected read-only
//! [`PoiTable`], which concurrent requests may read without locking.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tripweaver_core::{
//!     Category, CategoryPreference, ParsedTripRequest, Poi, PoiTable,
//! };
//! use tripweaver_planner::Planner;
//!
//! let table = Arc::new(PoiTable::new(vec![
//!     Poi::new("Paris", "Louvre", "France", Category::Museum, 9.4),
//!     Poi::new("Paris", "Orsay", "France", Category::Museum, 8.9),
//! ]));
//! let planner = Planner::new(table);
//! let request = ParsedTripRequest::new(
//!     "2 days in Paris visiting museums",
//!     "Paris",
//!     2,
//!     CategoryPreference::Explicit(vec![Category::Museum]),
//! );
//! let plan = planner.plan(&request);
//! assert_eq!(plan.days.len(), 2);
//! ```

#![forbid(unsafe_code)]

mod allocate;
mod filter;
mod score;
mod select;

pub use allocate::allocate_days;
pub use filter::{filter_catalog, top_popular};
pub use score::{CATEGORY_MATCH_BONUS, CategoryBoostScorer};
pub use select::select_greedy;

use std::sync::Arc;

use log::{debug, info, warn};
use tripweaver_core::{
    DescriptionProvider, Explainer, ParsedTripRequest, Place, PoiTable, Scorer, TripPlan,
};

/// Tuning knobs for the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Pacing constraint: the most places any single day may hold.
    pub per_day_cap: usize,
    /// Lower bound on the ranked candidate pool handed to the selector;
    /// the pool grows with `days * per_day_cap` when that is larger.
    pub candidate_pool: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            per_day_cap: 4,
            candidate_pool: 30,
        }
    }
}

/// The planning pipeline over an injected read-only catalog.
///
/// Construction is builder-style: the scorer defaults to
/// [`CategoryBoostScorer`] and the enrichment and explanation hooks start
/// absent. `plan` is infallible — an empty candidate set produces a plan
/// with no days rather than an error, and adapter failures degrade to
/// missing fields.
pub struct Planner {
    table: Arc<PoiTable>,
    scorer: Box<dyn Scorer>,
    describer: Option<Box<dyn DescriptionProvider>>,
    explainer: Option<Box<dyn Explainer>>,
    config: PlannerConfig,
}

impl Planner {
    /// Build a planner over `table` with default configuration.
    #[must_use]
    pub fn new(table: Arc<PoiTable>) -> Self {
        Self {
            table,
            scorer: Box::new(CategoryBoostScorer),
            describer: None,
            explainer: None,
            config: PlannerConfig::default(),
        }
    }

    /// Replace the pipeline configuration.
    #[must_use]
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Attach a description provider for place enrichment.
    #[must_use]
    pub fn with_describer(mut self, describer: impl DescriptionProvider + 'static) -> Self {
        self.describer = Some(Box::new(describer));
        self
    }

    /// Attach an explanation generator.
    #[must_use]
    pub fn with_explainer(mut self, explainer: impl Explainer + 'static) -> Self {
        self.explainer = Some(Box::new(explainer));
        self
    }

    /// Produce an itinerary for a parsed request.
    #[must_use]
    pub fn plan(&self, request: &ParsedTripRequest) -> TripPlan {
        let needed = request.days().saturating_mul(self.config.per_day_cap);
        let pool_size = needed.max(self.config.candidate_pool);

        let candidates =
            filter_catalog(&self.table, request.city(), request.preference(), pool_size);
        debug!(
            "{} candidates after filtering {:?}",
            candidates.len(),
            request.city()
        );

        let selected = select_greedy(&candidates, self.scorer.as_ref(), request, needed);
        if selected.is_empty() {
            warn!(
                "no usable places for {:?}; returning an empty plan",
                request.city()
            );
            return TripPlan::empty(request.city());
        }

        let places: Vec<Place> = selected.iter().map(|poi| Place::from_poi(poi)).collect();
        let backfill = top_popular(&self.table, request.city(), pool_size);
        let mut days = allocate_days(
            places,
            request.days(),
            self.config.per_day_cap,
            request.preference().is_explicit(),
            &backfill,
        );

        if let Some(describer) = self.describer.as_deref() {
            for day in &mut days {
                for place in &mut day.places {
                    place.description = describer.describe(&place.name);
                }
            }
        }

        let mut plan = TripPlan::new(request.city(), days);
        if let Some(explainer) = self.explainer.as_deref() {
            plan.explanation = explainer.explain(request.query(), request, &plan);
        }
        info!(
            "planned {} places over {} days in {:?}",
            plan.place_count(),
            plan.days.len(),
            plan.city
        );
        plan
    }
}

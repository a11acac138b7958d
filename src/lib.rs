//! Facade crate for the TripWeaver itinerary engine.
//!
//! This crate re-exports the core domain types and the planning pipeline so
//! that embedders depend on a single crate. The CSV loader and HTTP adapters
//! live in `tripweaver-data`, and the command line front end in
//! `tripweaver-cli`.

#![forbid(unsafe_code)]

pub use tripweaver_core::{
    Category, CategoryPreference, DayPlan, DescriptionProvider, Explainer, MAX_LATITUDE,
    MAX_LONGITUDE, ParsedTripRequest, Place, Poi, PoiSource, PoiTable, Scorer, TripPlan,
};
pub use tripweaver_planner::{
    CATEGORY_MATCH_BONUS, CategoryBoostScorer, Planner, PlannerConfig,
};

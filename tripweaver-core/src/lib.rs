//! Core domain types for the TripWeaver engine.
//!
//! The crate defines the canonical point-of-interest model, the parsed trip
//! request, the itinerary output types, and the boundary traits the pipeline
//! consumes (scoring, live search, enrichment, explanation). It performs no
//! I/O of its own; adapters live in `tripweaver-data` and the pipeline in
//! `tripweaver-planner`.

#![forbid(unsafe_code)]

mod adapter;
mod plan;
mod poi;
mod request;
mod scorer;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use adapter::{DescriptionProvider, Explainer, PoiSource};
pub use plan::{DayPlan, Place, TripPlan};
pub use poi::{Category, MAX_LATITUDE, MAX_LONGITUDE, Poi, PoiTable};
pub use request::{CategoryPreference, ParsedTripRequest};
pub use scorer::Scorer;

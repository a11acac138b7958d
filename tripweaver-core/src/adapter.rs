//! Boundary traits for external collaborators.
//!
//! The pipeline consumes these interfaces without caring how they are
//! implemented. All of them degrade rather than fail: a search adapter that
//! hits a network error returns no candidates, an enrichment provider that
//! cannot describe a place returns `None`, and a failed explanation leaves
//! the plan without one. Core code never sees an adapter error.

use crate::{ParsedTripRequest, Poi, TripPlan};

/// A data source that returns canonical POIs for a free-text search.
///
/// Both the offline catalog and live search services fit this shape; the
/// planner accepts rows from either without branching on provenance.
pub trait PoiSource: Send + Sync {
    /// Search for POIs matching `query` in `city`.
    ///
    /// Adapter failures (network, auth, decode) must surface as an empty
    /// vector, never as an error.
    fn search(&self, query: &str, city: &str) -> Vec<Poi>;
}

/// Optional encyclopedic enrichment for place descriptions.
pub trait DescriptionProvider: Send + Sync {
    /// A short description of `place`, or `None` when nothing is available.
    fn describe(&self, place: &str) -> Option<String>;
}

/// Optional natural-language explanation of a finished plan.
pub trait Explainer: Send + Sync {
    /// Explain `plan` for the user, or `None` when generation fails.
    fn explain(&self, query: &str, request: &ParsedTripRequest, plan: &TripPlan)
    -> Option<String>;
}

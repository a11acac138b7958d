//! Itinerary output types.
//!
//! A [`TripPlan`] owns its [`DayPlan`]s exclusively and a `DayPlan` owns its
//! [`Place`]s; the pipeline builds the whole structure before returning it
//! and nothing mutates it afterwards.

use crate::{Category, Poi};

/// A place scheduled into an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Place name.
    pub name: String,
    /// POI category.
    pub category: Category,
    /// Optional enrichment text; absent when no provider is configured or
    /// the provider had nothing to say.
    pub description: Option<String>,
}

impl Place {
    /// Build a place without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            description: None,
        }
    }

    /// Project a catalog POI into an itinerary place.
    #[must_use]
    pub fn from_poi(poi: &Poi) -> Self {
        Self::new(poi.name.clone(), poi.category.clone())
    }
}

/// One day of an itinerary.
///
/// `day` is 1-based; an empty place list is a valid, deliberately relaxed
/// day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// 1-based day index.
    pub day: usize,
    /// Places to visit, in order.
    pub places: Vec<Place>,
}

impl DayPlan {
    /// Build a day plan.
    #[must_use]
    pub const fn new(day: usize, places: Vec<Place>) -> Self {
        Self { day, places }
    }
}

/// A complete multi-day itinerary.
///
/// # Examples
/// ```
/// use tripweaver_core::TripPlan;
///
/// let plan = TripPlan::empty("Paris");
/// assert!(plan.days.is_empty());
/// assert!(plan.explanation.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    /// City the itinerary covers.
    pub city: String,
    /// Day plans in ascending day order.
    pub days: Vec<DayPlan>,
    /// Optional free-text explanation of the itinerary.
    pub explanation: Option<String>,
}

impl TripPlan {
    /// Build a plan without an explanation.
    #[must_use]
    pub fn new(city: impl Into<String>, days: Vec<DayPlan>) -> Self {
        Self {
            city: city.into(),
            days,
            explanation: None,
        }
    }

    /// The graceful "no results" plan: a city with no days.
    #[must_use]
    pub fn empty(city: impl Into<String>) -> Self {
        Self::new(city, Vec::new())
    }

    /// Total number of places across all days.
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.days.iter().map(|day| day.places.len()).sum()
    }
}

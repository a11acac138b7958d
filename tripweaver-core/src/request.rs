//! Parsed trip requests and the category filtering mode.

use crate::Category;

/// How category filtering should behave for a request.
///
/// The distinction matters downstream: only an [`Explicit`] preference can
/// trigger the day allocator's backfill regime when strict filtering leaves
/// too few places for the requested day count. An [`Implicit`] preference
/// (inferred rather than stated by the user) biases scoring but never
/// tightens allocation.
///
/// [`Explicit`]: CategoryPreference::Explicit
/// [`Implicit`]: CategoryPreference::Implicit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPreference {
    /// The user expressed no category preference.
    Unspecified,
    /// Categories inferred by a parser or default, not stated by the user.
    Implicit(Vec<Category>),
    /// Categories the user stated explicitly.
    Explicit(Vec<Category>),
}

impl CategoryPreference {
    /// The requested categories; empty for [`CategoryPreference::Unspecified`].
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        match self {
            Self::Unspecified => &[],
            Self::Implicit(categories) | Self::Explicit(categories) => categories,
        }
    }

    /// Whether the user stated the categories explicitly.
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// A trip request after query parsing.
///
/// The city is required — parsers fail upstream when none is detected — and
/// the day count is clamped to at least one.
///
/// # Examples
/// ```
/// use tripweaver_core::{Category, CategoryPreference, ParsedTripRequest};
///
/// let request = ParsedTripRequest::new(
///     "3 days in Paris visiting museums",
///     "Paris",
///     3,
///     CategoryPreference::Explicit(vec![Category::Museum]),
/// );
/// assert_eq!(request.days(), 3);
/// assert!(request.preference().is_explicit());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTripRequest {
    query: String,
    city: String,
    days: usize,
    preference: CategoryPreference,
}

impl ParsedTripRequest {
    /// Build a request; `days` below one is clamped to one.
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        city: impl Into<String>,
        days: usize,
        preference: CategoryPreference,
    ) -> Self {
        Self {
            query: query.into(),
            city: city.into(),
            days: days.max(1),
            preference,
        }
    }

    /// The original free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The canonical city key used for filtering.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Requested day count, always at least one.
    #[must_use]
    pub const fn days(&self) -> usize {
        self.days
    }

    /// The category filtering mode.
    #[must_use]
    pub const fn preference(&self) -> &CategoryPreference {
        &self.preference
    }

    /// Replace the day count, keeping the clamp to at least one.
    #[must_use]
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days.max(1);
        self
    }
}

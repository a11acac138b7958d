//! Deterministic, template-based plan explanations.

use tripweaver_core::{Explainer, ParsedTripRequest, TripPlan};

/// A stand-in [`Explainer`] that outlines the plan structure.
///
/// Produces a short deterministic paragraph instead of calling out to a
/// language model; an empty plan yields no explanation at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineExplainer;

impl Explainer for OutlineExplainer {
    fn explain(
        &self,
        _query: &str,
        request: &ParsedTripRequest,
        plan: &TripPlan,
    ) -> Option<String> {
        if plan.days.is_empty() {
            return None;
        }

        let categories = request.preference().categories();
        let mut text = if categories.is_empty() {
            format!(
                "A {}-day tour of {} built around its most popular spots.",
                plan.days.len(),
                plan.city
            )
        } else {
            let focus = categories
                .iter()
                .map(|category| category.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "A {}-day tour of {} focused on {focus}.",
                plan.days.len(),
                plan.city
            )
        };

        for day in &plan.days {
            let sentence = match day.places.as_slice() {
                [] => format!(" Day {} is left free to explore.", day.day),
                [only] => format!(" Day {} centres on {}.", day.day, only.name),
                [first, .., last] => format!(
                    " Day {} runs from {} through {}.",
                    day.day, first.name, last.name
                ),
            };
            text.push_str(&sentence);
        }
        Some(text)
    }
}

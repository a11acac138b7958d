//! End-to-end behaviour of the planning pipeline.

use std::sync::Arc;

use rstest::{fixture, rstest};
use tripweaver_core::test_support::{poi, priced_poi};
use tripweaver_core::{
    Category, CategoryPreference, DescriptionProvider, Explainer, ParsedTripRequest, PoiTable,
    TripPlan,
};
use tripweaver_planner::{Planner, PlannerConfig};

#[fixture]
fn paris_table() -> Arc<PoiTable> {
    Arc::new(PoiTable::new(vec![
        poi("Paris", "Eiffel Tower", Category::Landmark, 9.8),
        poi("Paris", "Louvre", Category::Museum, 9.4),
        poi("Paris", "Notre-Dame", Category::Landmark, 9.1),
        poi("Paris", "Orsay", Category::Museum, 8.9),
        poi("Paris", "Luxembourg Gardens", Category::Park, 8.5),
        poi("Paris", "Sainte-Chapelle", Category::Landmark, 8.2),
        poi("Paris", "Pompidou", Category::Museum, 8.1),
        poi("Paris", "Tuileries", Category::Park, 7.9),
        poi("Berlin", "Museum Island", Category::Museum, 9.2),
    ]))
}

fn request(days: usize, preference: CategoryPreference) -> ParsedTripRequest {
    ParsedTripRequest::new("test query", "Paris", days, preference)
}

fn day_names(plan: &TripPlan, day: usize) -> Vec<&str> {
    plan.days
        .get(day)
        .map(|d| d.places.iter().map(|p| p.name.as_str()).collect())
        .unwrap_or_default()
}

#[rstest]
fn filters_to_matching_categories_without_broadening(paris_table: Arc<PoiTable>) {
    // Three museums exist, so the explicit filter stays strict; the most
    // popular museums fill day one in rank order.
    let planner = Planner::new(paris_table);
    let plan = planner.plan(&request(
        1,
        CategoryPreference::Explicit(vec![Category::Museum]),
    ));

    assert_eq!(plan.days.len(), 1);
    assert_eq!(day_names(&plan, 0), vec!["Louvre", "Orsay", "Pompidou"]);
}

#[rstest]
fn strict_filter_tie_break_prefers_cheaper_places() {
    let table = Arc::new(PoiTable::new(vec![
        poi("Paris", "A", Category::Museum, 9.0),
        priced_poi("Paris", "B", Category::Park, 9.0, 5.0),
        poi("Paris", "C", Category::Museum, 7.0),
    ]));
    let planner = Planner::new(table);
    let plan = planner.plan(&request(
        1,
        CategoryPreference::Explicit(vec![Category::Museum]),
    ));

    // The category filter restricts to museums before any fallback: B never
    // appears even though it ties A on popularity.
    assert_eq!(day_names(&plan, 0), vec!["A", "C"]);
}

#[rstest]
fn spreads_places_evenly_with_remainder_to_early_days(paris_table: Arc<PoiTable>) {
    // 8 Paris POIs, 3 days, cap 4 → needed 12, all 8 selected → [3, 3, 2].
    let planner = Planner::new(paris_table);
    let plan = planner.plan(&request(3, CategoryPreference::Unspecified));

    let sizes: Vec<usize> = plan.days.iter().map(|day| day.places.len()).collect();
    assert_eq!(sizes, vec![3, 3, 2]);
}

#[rstest]
fn backfills_last_day_when_strict_filter_starves(paris_table: Arc<PoiTable>) {
    let table = Arc::new(PoiTable::new(
        paris_table
            .iter()
            .filter(|poi| poi.category != Category::Museum || poi.name == "Louvre")
            .cloned()
            .chain(std::iter::once(
                poi("Paris", "Orsay", Category::Museum, 8.9),
            ))
            .collect(),
    ));
    // Only two museums remain; an explicit 3-day museum request splits them
    // across days 1-2 and fills day 3 from the city-wide ranking.
    let planner = Planner::new(table);
    let plan = planner.plan(&request(
        3,
        CategoryPreference::Explicit(vec![Category::Museum]),
    ));

    let sizes: Vec<usize> = plan.days.iter().map(|day| day.places.len()).collect();
    assert_eq!(sizes, vec![1, 1, 1]);
    assert_eq!(day_names(&plan, 2), vec!["Eiffel Tower"]);
}

#[rstest]
fn unknown_city_returns_empty_plan_not_error(paris_table: Arc<PoiTable>) {
    let planner = Planner::new(paris_table);
    let plan = planner.plan(&ParsedTripRequest::new(
        "q",
        "Atlantis",
        2,
        CategoryPreference::Unspecified,
    ));

    assert_eq!(plan.city, "Atlantis");
    assert!(plan.days.is_empty());
    assert!(plan.explanation.is_none());
}

#[rstest]
fn respects_per_day_cap(paris_table: Arc<PoiTable>) {
    let planner = Planner::new(paris_table).with_config(PlannerConfig {
        per_day_cap: 2,
        candidate_pool: 30,
    });
    let plan = planner.plan(&request(2, CategoryPreference::Unspecified));

    assert!(plan.place_count() <= 4);
    assert!(plan.days.iter().all(|day| day.places.len() <= 2));
}

struct CannedDescriber;

impl DescriptionProvider for CannedDescriber {
    fn describe(&self, place: &str) -> Option<String> {
        (place == "Louvre").then(|| "The world's largest art museum.".to_owned())
    }
}

#[rstest]
fn describer_failures_leave_descriptions_absent(paris_table: Arc<PoiTable>) {
    let planner = Planner::new(paris_table).with_describer(CannedDescriber);
    let plan = planner.plan(&request(
        1,
        CategoryPreference::Explicit(vec![Category::Museum]),
    ));

    let day = plan.days.first().expect("one day");
    for place in &day.places {
        if place.name == "Louvre" {
            assert!(place.description.is_some());
        } else {
            assert!(place.description.is_none());
        }
    }
}

struct FailingExplainer;

impl Explainer for FailingExplainer {
    fn explain(
        &self,
        _query: &str,
        _request: &ParsedTripRequest,
        _plan: &TripPlan,
    ) -> Option<String> {
        None
    }
}

struct EchoExplainer;

impl Explainer for EchoExplainer {
    fn explain(
        &self,
        query: &str,
        _request: &ParsedTripRequest,
        plan: &TripPlan,
    ) -> Option<String> {
        Some(format!("{} days for {query}", plan.days.len()))
    }
}

#[rstest]
fn failed_explanation_degrades_to_none(paris_table: Arc<PoiTable>) {
    let planner = Planner::new(paris_table).with_explainer(FailingExplainer);
    let plan = planner.plan(&request(2, CategoryPreference::Unspecified));
    assert!(plan.explanation.is_none());
}

#[rstest]
fn explainer_sees_the_finished_plan(paris_table: Arc<PoiTable>) {
    let planner = Planner::new(paris_table).with_explainer(EchoExplainer);
    let plan = planner.plan(&request(2, CategoryPreference::Unspecified));
    assert_eq!(plan.explanation.as_deref(), Some("2 days for test query"));
}

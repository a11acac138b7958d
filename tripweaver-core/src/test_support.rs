//! Shared builders for tests across the workspace.
//!
//! Enabled through the `test-support` feature so production builds never
//! carry them.

use crate::{Category, Poi};

/// Build a POI with the given city, name, category, and popularity.
#[must_use]
pub fn poi(city: &str, name: &str, category: Category, popularity: f64) -> Poi {
    Poi::new(city, name, "Testland", category, popularity)
}

/// Build a POI with a price on top of the usual fields.
#[must_use]
pub fn priced_poi(
    city: &str,
    name: &str,
    category: Category,
    popularity: f64,
    price: f64,
) -> Poi {
    let mut built = poi(city, name, category, popularity);
    built.price = Some(price);
    built
}

//! The canonical point-of-interest model and the read-only catalog handle.

use std::fmt;

use geo::Coord;

/// Largest valid absolute latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Largest valid absolute longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A POI category.
///
/// The dataset uses a closed-ish vocabulary; anything outside it is carried
/// verbatim in [`Category::Other`] with a lowercased payload so that
/// comparisons stay case-insensitive.
///
/// # Examples
/// ```
/// use tripweaver_core::Category;
///
/// assert_eq!(Category::from("Museum"), Category::Museum);
/// assert_eq!(Category::from("NIGHTLIFE"), Category::Other("nightlife".into()));
/// assert_eq!(Category::Park.as_str(), "park");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    /// Museums and galleries.
    Museum,
    /// Parks and green spaces.
    Park,
    /// Monuments, sights, and other landmarks.
    Landmark,
    /// Restaurants, cafes, and other places to eat.
    Food,
    /// Shops and markets.
    Shopping,
    /// Theatres, venues, and nightlife.
    Entertainment,
    /// A category outside the canonical vocabulary, stored lowercased.
    Other(String),
}

impl Category {
    /// Return the lowercase name of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Museum => "museum",
            Self::Park => "park",
            Self::Landmark => "landmark",
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "museum" => Self::Museum,
            "park" => Self::Park,
            "landmark" => Self::Landmark,
            "food" => Self::Food,
            "shopping" => Self::Shopping,
            "entertainment" => Self::Entertainment,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single point of interest in canonical form.
///
/// Coordinates, when present, are WGS84 with `x = longitude` and
/// `y = latitude`; the raw dataset strings are preserved alongside the
/// normalised location. `popularity` is the ranking key and is required —
/// the loader drops rows where it cannot be coerced.
///
/// # Examples
/// ```
/// use tripweaver_core::{Category, Poi};
///
/// let poi = Poi::new("Paris", "Louvre", "France", Category::Museum, 9.4);
/// assert_eq!(poi.category, Category::Museum);
/// assert!(poi.location.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poi {
    /// City the POI belongs to, as it appears in the dataset.
    pub city: String,
    /// Place name.
    pub name: String,
    /// Country name.
    pub country: String,
    /// POI category.
    pub category: Category,
    /// Price level; `None` when the dataset value was absent or malformed.
    pub price: Option<f64>,
    /// Opening time in minutes of day, when known.
    pub open_time: Option<f64>,
    /// Closing time in minutes of day, when known.
    pub close_time: Option<f64>,
    /// Popularity score as loaded; never missing.
    pub popularity: f64,
    /// Raw latitude string from the dataset, when present.
    pub raw_lat: Option<String>,
    /// Raw longitude string from the dataset, when present.
    pub raw_lon: Option<String>,
    /// Normalised location (`x = lon`, `y = lat`); `None` when either
    /// coordinate failed to normalise.
    pub location: Option<Coord<f64>>,
}

impl Poi {
    /// Construct a `Poi` with the required fields; everything optional
    /// starts absent.
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        category: Category,
        popularity: f64,
    ) -> Self {
        Self {
            city: city.into(),
            name: name.into(),
            country: country.into(),
            category,
            price: None,
            open_time: None,
            close_time: None,
            popularity,
            raw_lat: None,
            raw_lon: None,
            location: None,
        }
    }
}

/// The read-only POI catalog.
///
/// Built once at process start (by the dataset loader or a live search
/// adapter) and shared behind an `Arc` thereafter; concurrent requests may
/// read it without locking because nothing mutates it after construction.
///
/// # Examples
/// ```
/// use tripweaver_core::{Category, Poi, PoiTable};
///
/// let table = PoiTable::new(vec![Poi::new(
///     "Paris", "Louvre", "France", Category::Museum, 9.4,
/// )]);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiTable {
    pois: Vec<Poi>,
}

impl PoiTable {
    /// Wrap a vector of canonical POIs.
    #[must_use]
    pub const fn new(pois: Vec<Poi>) -> Self {
        Self { pois }
    }

    /// All POIs in load order.
    #[must_use]
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Number of POIs in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the catalog holds no POIs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Iterate over the POIs in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Poi> {
        self.pois.iter()
    }
}

impl<'a> IntoIterator for &'a PoiTable {
    type Item = &'a Poi;
    type IntoIter = std::slice::Iter<'a, Poi>;

    fn into_iter(self) -> Self::IntoIter {
        self.pois.iter()
    }
}

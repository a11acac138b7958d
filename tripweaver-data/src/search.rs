//! Live POI search over an HTTP text-search API.
//!
//! The adapter returns the same canonical [`Poi`] shape as the offline
//! loader, so the planner never branches on provenance. Per the boundary
//! contract, any failure — network, auth, decode — is logged and treated as
//! "the adapter returned zero candidates".

use std::time::Duration;

use geo::Coord;
use log::warn;
use serde::Deserialize;
use thiserror::Error;
use tripweaver_core::{Category, MAX_LATITUDE, MAX_LONGITUDE, Poi, PoiSource};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while constructing an [`HttpPoiSource`].
#[derive(Debug, Error)]
pub enum SearchBuildError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A text-search web API as a [`PoiSource`].
pub struct HttpPoiSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl HttpPoiSource {
    /// Build a source against `endpoint`, authenticating with `api_key`.
    ///
    /// # Errors
    /// Returns [`SearchBuildError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, SearchBuildError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    fn fetch(&self, query: &str, city: &str) -> Result<Vec<Poi>, reqwest::Error> {
        let text = format!("{query} in {city}");
        let response: SearchResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("query", text.as_str()), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response
            .results
            .into_iter()
            .map(|result| result.into_poi(city))
            .collect())
    }
}

impl PoiSource for HttpPoiSource {
    fn search(&self, query: &str, city: &str) -> Vec<Poi> {
        match self.fetch(query, city) {
            Ok(pois) => pois,
            Err(err) => {
                warn!("live POI search failed: {err}; treating as zero candidates");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    name: String,
    #[serde(default)]
    types: Vec<String>,
    rating: Option<f64>,
    price_level: Option<f64>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl SearchResult {
    fn into_poi(self, city: &str) -> Poi {
        let mut poi = Poi::new(
            city,
            self.name,
            "",
            map_provider_types(&self.types),
            self.rating.unwrap_or(0.0),
        );
        poi.price = self.price_level;
        if let Some(geometry) = self.geometry {
            let LatLng { lat, lng } = geometry.location;
            if lat.abs() <= MAX_LATITUDE && lng.abs() <= MAX_LONGITUDE {
                poi.location = Some(Coord { x: lng, y: lat });
            }
        }
        poi
    }
}

/// Map provider place types onto the canonical vocabulary. Unmapped types
/// carry through as [`Category::Other`]; an empty type list defaults to
/// [`Category::Landmark`].
fn map_provider_types(types: &[String]) -> Category {
    for kind in types {
        match kind.as_str() {
            "museum" | "art_gallery" => return Category::Museum,
            "park" => return Category::Park,
            "tourist_attraction" => return Category::Landmark,
            "restaurant" | "cafe" | "meal_takeaway" => return Category::Food,
            "shopping_mall" => return Category::Shopping,
            "night_club" | "movie_theater" => return Category::Entertainment,
            _ => {}
        }
    }
    types
        .first()
        .map_or(Category::Landmark, |kind| Category::from(kind.as_str()))
}

//! Dataset loading: a heterogeneous CSV into the canonical POI table.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use geo::Coord;
use log::{debug, info};
use thiserror::Error;
use tripweaver_core::{Category, Poi, PoiTable};

use crate::coord::{normalize_latitude, normalize_longitude};

/// Canonical columns every dataset must provide, after aliasing.
const REQUIRED_COLUMNS: [&str; 10] = [
    "city",
    "name",
    "country",
    "category",
    "price",
    "open_time",
    "close_time",
    "popularity",
    "lat",
    "lon",
];

/// Known alternate header names, remapped before validation.
const COLUMN_ALIASES: [(&str, &str); 10] = [
    ("city_name", "city"),
    ("place_name", "name"),
    ("place_category", "category"),
    ("poi_category", "category"),
    ("price_usd", "price"),
    ("open_time_min", "open_time"),
    ("close_time_min", "close_time"),
    ("popularity_score", "popularity"),
    ("latitude", "lat"),
    ("longitude", "lon"),
];

/// Errors raised while loading the POI dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read or parsed as CSV.
    #[error("failed to read the POI dataset: {0}")]
    Csv(#[from] csv::Error),
    /// Required columns are absent even after header aliasing. Fatal; there
    /// is no usable fallback for a dataset with the wrong shape.
    #[error("dataset is missing required columns {missing:?} (found {found:?})")]
    MissingColumns {
        /// Canonical column names that could not be resolved.
        missing: Vec<String>,
        /// Header names actually present in the file.
        found: Vec<String>,
    },
}

/// Load the canonical POI table from a CSV file on disk.
///
/// # Errors
/// Returns [`LoadError::Csv`] for I/O and parse failures and
/// [`LoadError::MissingColumns`] when the header is missing required
/// columns after aliasing.
pub fn load_catalog(path: &Path) -> Result<PoiTable, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_from(reader)
}

/// Load the canonical POI table from any CSV byte stream.
///
/// # Errors
/// Same failure modes as [`load_catalog`].
pub fn read_catalog<R: Read>(input: R) -> Result<PoiTable, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    read_from(reader)
}

fn read_from<R: Read>(mut reader: csv::Reader<R>) -> Result<PoiTable, LoadError> {
    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut pois = Vec::new();
    let mut dropped = 0_usize;
    for record in reader.records() {
        let row = record?;
        match build_poi(&row, &columns) {
            Some(poi) => pois.push(poi),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!("dropped {dropped} rows without a usable popularity score");
    }
    info!("loaded {} POIs from the dataset", pois.len());
    Ok(PoiTable::new(pois))
}

/// Resolve every required canonical column to a header index, applying
/// aliases for headers that drifted. A canonical header always wins over
/// an alias.
fn resolve_columns(
    headers: &csv::StringRecord,
) -> Result<HashMap<&'static str, usize>, LoadError> {
    let lowered: Vec<String> = headers
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    let mut columns = HashMap::new();
    let mut missing = Vec::new();
    for canonical in REQUIRED_COLUMNS {
        let direct = lowered.iter().position(|header| header == canonical);
        let aliased = || {
            COLUMN_ALIASES
                .iter()
                .filter(|(_, target)| *target == canonical)
                .find_map(|(alias, _)| lowered.iter().position(|header| header == alias))
        };
        match direct.or_else(aliased) {
            Some(index) => {
                columns.insert(canonical, index);
            }
            None => missing.push(canonical.to_owned()),
        }
    }

    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(LoadError::MissingColumns {
            missing,
            found: headers.iter().map(str::to_owned).collect(),
        })
    }
}

/// Build a canonical POI from one row; `None` drops the row (missing
/// popularity — the ranking key is unusable downstream).
fn build_poi(row: &csv::StringRecord, columns: &HashMap<&'static str, usize>) -> Option<Poi> {
    let field = |name: &str| -> &str {
        columns
            .get(name)
            .and_then(|&index| row.get(index))
            .unwrap_or("")
    };

    let popularity = coerce_numeric(field("popularity"))?;
    let mut poi = Poi::new(
        field("city"),
        field("name"),
        field("country"),
        Category::from(field("category")),
        popularity,
    );
    poi.price = coerce_numeric(field("price"));
    poi.open_time = coerce_numeric(field("open_time"));
    poi.close_time = coerce_numeric(field("close_time"));

    let raw_lat = field("lat");
    let raw_lon = field("lon");
    poi.raw_lat = (!raw_lat.is_empty()).then(|| raw_lat.to_owned());
    poi.raw_lon = (!raw_lon.is_empty()).then(|| raw_lon.to_owned());
    if let (Some(y), Some(x)) = (normalize_latitude(raw_lat), normalize_longitude(raw_lon)) {
        poi.location = Some(Coord { x, y });
    }
    Some(poi)
}

/// Coerce a raw field to a finite float; anything else is "missing".
fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write as _;

    const CANONICAL: &str = "\
city,name,country,category,price,open_time,close_time,popularity,lat,lon
Paris,Louvre,France,museum,17,540,1080,9.4,48.8606,2.3376
Paris,Orsay,France,museum,,540,1080,8.9,48.8599,2.3266
";

    const ALIASED: &str = "\
city_name,place_name,country,place_category,price_usd,open_time_min,close_time_min,popularity_score,latitude,longitude
New York,Central Park,USA,park,0,360,1320,9.1,40.7829° N,73.9654° W
";

    #[rstest]
    fn loads_canonical_headers() {
        let table = read_catalog(CANONICAL.as_bytes()).expect("canonical dataset loads");
        assert_eq!(table.len(), 2);
        let louvre = table.pois().first().expect("first row");
        assert_eq!(louvre.name, "Louvre");
        assert_eq!(louvre.category, Category::Museum);
        assert_eq!(louvre.price, Some(17.0));
        assert_eq!(louvre.popularity, 9.4);
    }

    #[rstest]
    fn remaps_aliased_headers_before_validation() {
        let table = read_catalog(ALIASED.as_bytes()).expect("aliased dataset loads");
        let park = table.pois().first().expect("one row");
        assert_eq!(park.city, "New York");
        assert_eq!(park.name, "Central Park");
        assert_eq!(park.price, Some(0.0));
        assert_eq!(park.popularity, 9.1);
    }

    #[rstest]
    fn missing_columns_fail_with_schema_error() {
        let input = "city,name,category\nParis,Louvre,museum\n";
        let err = read_catalog(input.as_bytes()).expect_err("schema must be rejected");
        match err {
            LoadError::MissingColumns { missing, found } => {
                assert!(missing.contains(&"popularity".to_owned()));
                assert!(missing.contains(&"country".to_owned()));
                assert!(!missing.contains(&"city".to_owned()));
                assert_eq!(found, vec!["city", "name", "category"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn rows_without_popularity_are_dropped() {
        let input = "\
city,name,country,category,price,open_time,close_time,popularity,lat,lon
Paris,Louvre,France,museum,17,,,9.4,,
Paris,Ghost,France,museum,17,,,,,
Paris,Bad,France,museum,17,,,n/a,,
";
        let table = read_catalog(input.as_bytes()).expect("dataset loads");
        let names: Vec<_> = table.iter().map(|poi| poi.name.as_str()).collect();
        assert_eq!(names, vec!["Louvre"]);
    }

    #[rstest]
    fn unparseable_numerics_become_missing() {
        let input = "\
city,name,country,category,price,open_time,close_time,popularity,lat,lon
Paris,Louvre,France,museum,free,soon,late,9.4,,
";
        let table = read_catalog(input.as_bytes()).expect("dataset loads");
        let louvre = table.pois().first().expect("one row");
        assert_eq!(louvre.price, None);
        assert_eq!(louvre.open_time, None);
        assert_eq!(louvre.close_time, None);
    }

    #[rstest]
    fn hemisphere_coordinates_normalise_to_signed_floats() {
        let table = read_catalog(ALIASED.as_bytes()).expect("dataset loads");
        let park = table.pois().first().expect("one row");
        let location = park.location.expect("normalised location");
        assert_eq!(location.y, 40.7829);
        assert_eq!(location.x, -73.9654);
        assert_eq!(park.raw_lat.as_deref(), Some("40.7829° N"));
    }

    #[rstest]
    fn malformed_coordinates_preserve_raw_and_stay_absent() {
        let input = "\
city,name,country,category,price,open_time,close_time,popularity,lat,lon
Paris,Louvre,France,museum,17,,,9.4,somewhere,2.3376
";
        let table = read_catalog(input.as_bytes()).expect("dataset loads");
        let louvre = table.pois().first().expect("one row");
        assert!(louvre.location.is_none());
        assert_eq!(louvre.raw_lat.as_deref(), Some("somewhere"));
        assert_eq!(louvre.raw_lon.as_deref(), Some("2.3376"));
    }

    #[rstest]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(CANONICAL.as_bytes()).expect("write dataset");
        let table = load_catalog(file.path()).expect("load from disk");
        assert_eq!(table.len(), 2);
    }
}

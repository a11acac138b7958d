//! Coordinate normalisation for heterogeneous dataset forms.
//!
//! Dataset coordinates arrive either as plain signed floats or as strings
//! like `"40.7309° N"` / `"73.9973° W"`. The normaliser strips degree
//! glyphs, parses the number, and applies the hemisphere sign. Anything it
//! cannot make sense of — including out-of-range values — normalises to
//! "absent" rather than erroring.

use tripweaver_core::{MAX_LATITUDE, MAX_LONGITUDE};

/// Normalise a raw latitude string to signed degrees in `[-90, 90]`.
#[must_use]
pub fn normalize_latitude(raw: &str) -> Option<f64> {
    normalize(raw, MAX_LATITUDE)
}

/// Normalise a raw longitude string to signed degrees in `[-180, 180]`.
#[must_use]
pub fn normalize_longitude(raw: &str) -> Option<f64> {
    normalize(raw, MAX_LONGITUDE)
}

#[expect(
    clippy::float_arithmetic,
    reason = "hemisphere handling negates the parsed magnitude"
)]
fn normalize(raw: &str, bound: f64) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return bounded(value, bound);
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, '°' | 'º' | 'ﹾ'))
        .collect();
    let mut parts = cleaned.split_whitespace();
    let value: f64 = parts.next()?.parse().ok()?;
    let hemisphere = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let signed = match hemisphere {
        "N" | "n" | "E" | "e" => value.abs(),
        "S" | "s" | "W" | "w" => -value.abs(),
        _ => return None,
    };
    bounded(signed, bound)
}

fn bounded(value: f64, bound: f64) -> Option<f64> {
    (value.is_finite() && value.abs() <= bound).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("40.7309° N", Some(40.7309))]
    #[case("73.9973° W", Some(-73.9973))]
    #[case("51.5072º n", Some(51.5072))]
    #[case("12.97 S", Some(-12.97))]
    #[case("-33.8688", Some(-33.8688))]
    #[case("0", Some(0.0))]
    #[case("90.0", Some(90.0))]
    #[case("90.5", None)]
    #[case("12.0° Q", None)]
    #[case("not a coordinate", None)]
    #[case("", None)]
    #[case("  ", None)]
    #[case("1 2 3", None)]
    fn latitude_forms(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(normalize_latitude(raw), expected);
    }

    #[rstest]
    #[case("139.6917° E", Some(139.6917))]
    #[case("118.2426ﹾ W", Some(-118.2426))]
    #[case("180.0", Some(180.0))]
    #[case("180.5° E", None)]
    fn longitude_forms(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(normalize_longitude(raw), expected);
    }

    #[rstest]
    fn latitude_rejects_longitude_magnitudes() {
        assert_eq!(normalize_latitude("139.6917° E"), None);
    }
}

//! The city record and its mapping from one tab-separated source line.
//!
//! A GeoNames dump line carries 19 tab-separated columns; this crate consumes
//! nine of them (0-indexed): 0 id, 1 name, 2 asciiname, 4 latitude,
//! 5 longitude, 8 country code, 14 population, 15 elevation, 16 time zone.
//! Everything else is ignored.

use serde::Serialize;

/// One city extracted from a logical line of the source feed.
///
/// Immutable after creation; each pipeline stage either drops it or passes it
/// downstream. Serialization key order matches the declaration order below.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct City {
    /// GeoNames numeric id; `None` (serialized as `null`) when the field is
    /// missing or non-numeric.
    pub id: Option<u64>,
    pub name: String,
    pub asciiname: String,
    /// Latitude, passed through as unparsed decimal text.
    pub lat: String,
    /// Longitude, passed through as unparsed decimal text.
    pub lng: String,
    /// ISO-3166 two-letter country code.
    #[serde(rename = "countryCode")]
    pub country_code: String,
    /// `None` when the source field is missing or non-numeric; such records
    /// fail the population predicate rather than aborting the run.
    pub population: Option<u64>,
    /// Metres above sea level. Empty, non-numeric, and literal-zero source
    /// values all map to `None`: the original converter folded falsy parses
    /// to null, and that coercion is preserved so a genuine elevation of
    /// zero is indistinguishable from absent.
    pub elevation: Option<i32>,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

impl City {
    /// Map one logical line to a record. Pure and infallible: a line with
    /// fewer columns than expected yields empty/absent trailing fields, and
    /// numeric fields degrade to `None` instead of raising.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let fields: Vec<&str> = line.split('\t').collect();
        let text = |i: usize| fields.get(i).copied().unwrap_or("").to_string();
        Self {
            id: parse_u64(fields.first().copied()),
            name: text(1),
            asciiname: text(2),
            lat: text(4),
            lng: text(5),
            country_code: text(8),
            population: parse_u64(fields.get(14).copied()),
            elevation: parse_elevation(fields.get(15).copied()),
            time_zone: text(16),
        }
    }
}

fn parse_u64(field: Option<&str>) -> Option<u64> {
    field.and_then(|f| f.parse().ok())
}

/// Elevation keeps the source's falsy-to-null coercion: zero maps to absent.
fn parse_elevation(field: Option<&str>) -> Option<i32> {
    field
        .and_then(|f| f.parse::<i32>().ok())
        .filter(|&e| e != 0)
}

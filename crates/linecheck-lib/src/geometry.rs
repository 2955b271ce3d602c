//! GeoJSON-style geometry types accepted and produced by the service.
//!
//! Only the `coordinates` member of a LineString object is interpreted. Other
//! members such as `"type"` are ignored, and positions may carry extra
//! elements (altitude) which are dropped on decode.
//!
//! Line strings decode from JSON objects only. The member name is matched
//! case-insensitively, a repeated member keeps its last value, and a `null`
//! value reads as no coordinates.

use std::fmt;

use geo::{Coord, Line};
use serde::de::{Error as _, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Minimum number of positions for a line string to describe a segment.
pub const MIN_POSITIONS: usize = 2;

/// A `(longitude, latitude)` coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        match values.as_slice() {
            [lon, lat, ..] => Ok(Self::new(*lon, *lat)),
            _ => Err(Error::InvalidPosition {
                found: values.len(),
            }),
        }
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.lon, position.lat]
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Position> for Coord<f64> {
    fn from(position: Position) -> Self {
        Coord {
            x: position.lon,
            y: position.lat,
        }
    }
}

impl From<Coord<f64>> for Position {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

/// An ordered sequence of positions describing a polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineString {
    pub coordinates: Vec<Position>,
}

const COORDINATES_FIELD: &str = "coordinates";

struct LineStringVisitor;

impl<'de> Visitor<'de> for LineStringVisitor {
    type Value = LineString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a line string object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<LineString, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut coordinates = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(COORDINATES_FIELD) {
                coordinates = map
                    .next_value::<Option<Vec<Position>>>()?
                    .unwrap_or_default();
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(LineString { coordinates })
    }
}

impl<'de> Deserialize<'de> for LineString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LineStringVisitor)
    }
}

impl LineString {
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }

    /// Decode a line string from a JSON request body.
    ///
    /// Decoding stops after the first JSON value, so trailing bytes after a
    /// complete object are ignored. A literal `null` decodes to an empty line
    /// string, which then fails [`LineString::ensure_valid`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let mut stream = serde_json::Deserializer::from_slice(bytes).into_iter::<Option<Self>>();
        match stream.next() {
            Some(decoded) => Ok(decoded?.unwrap_or_default()),
            None => Err(Error::Json(serde_json::Error::custom(
                "EOF while parsing a value",
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Whether the line has enough positions to take part in an intersection test.
    pub fn is_valid(&self) -> bool {
        self.coordinates.len() >= MIN_POSITIONS
    }

    pub fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::TooFewPositions {
                required: MIN_POSITIONS,
                found: self.coordinates.len(),
            })
        }
    }

    /// Consecutive segments in path order.
    pub fn segments(&self) -> impl Iterator<Item = Line<f64>> + '_ {
        self.coordinates
            .windows(2)
            .map(|pair| Line::new(Coord::from(pair[0]), Coord::from(pair[1])))
    }
}

impl From<Vec<(f64, f64)>> for LineString {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Position::from).collect())
    }
}

/// A generated comparison line with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub id: String,
    pub path: LineString,
}

use geo::{Coord, LineString, Point, coord};
use serde::{Deserialize, Serialize};

/// Geographic position in degrees.
///
/// Values pass through exactly as decoded; the codec performs no range
/// clamping, so callers see whatever the feed encoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ordered path geometry. Insertion order is encoding order; reversing
/// it reverses the path.
pub type DecodedPath = Vec<Coordinate>;

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        coord! { x: c.longitude, y: c.latitude }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::from(Coord::from(c))
    }
}

/// geo `LineString` over a path, x = longitude and y = latitude.
pub fn line_string_from_path(path: &[Coordinate]) -> LineString<f64> {
    path.iter().copied().map(Coord::from).collect()
}

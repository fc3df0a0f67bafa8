//! Value types produced by the decoder

pub mod to_geojson;
pub mod types;

pub use types::{Coordinate, DecodedPath, line_string_from_path};

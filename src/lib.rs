//! Codec for the Google encoded polyline format
//!
//! Transit feeds ship route geometry as compact ASCII strings of
//! per-axis coordinate deltas. This crate decodes those strings into
//! ordered latitude/longitude paths and connects them to the rest of
//! the geospatial stack: serde deserializers for feed payloads and
//! GeoJSON export for map frontends.
//!
//! Decoding is deterministic, allocation-light and all-or-nothing: a
//! truncated string yields [`Error::MalformedPolyline`], never a
//! partial path.

pub mod codec;
pub mod error;
pub mod model;
pub mod prelude;

pub use codec::{decode, decode_bulk, decode_with_precision};
pub use error::Error;
pub use model::{Coordinate, DecodedPath};

/// Decimal digits of coordinate precision in the standard encoding
pub const DEFAULT_PRECISION: u32 = 5;

pub use crate::DEFAULT_PRECISION;

// Re-export key components
pub use crate::codec::{decode, decode_bulk, decode_with_precision};
pub use crate::error::Error;
pub use crate::model::{Coordinate, DecodedPath};

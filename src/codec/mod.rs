//! Decoder for the Google encoded polyline format
//!
//! Route geometry arrives from transit feeds as a compact ASCII string.
//! Every coordinate is stored as a pair of deltas against the previous
//! point, each delta as a least-significant-first run of 5-bit chunks
//! offset by 63, with bit `0x20` marking continuation and the sign
//! folded into the low bit.

pub mod de;

use log::warn;
use rayon::prelude::*;

use crate::model::{Coordinate, DecodedPath};
use crate::{DEFAULT_PRECISION, Error};

/// Decode an encoded polyline into a path of degree coordinates.
///
/// Scaling is the standard five decimal digits. Decoding is
/// all-or-nothing: a string that ends in the middle of a coordinate
/// group fails with [`Error::MalformedPolyline`] and no partial path is
/// returned.
pub fn decode(encoded: &str) -> Result<DecodedPath, Error> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decode with a non-standard number of decimal digits.
///
/// `decode` fixes the scale at five digits; some feeds encode six.
#[allow(clippy::cast_precision_loss)]
pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<DecodedPath, Error> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();

    let mut path = Vec::with_capacity(bytes.len() / 4);
    let mut cursor = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while cursor < bytes.len() {
        lat += next_delta(bytes, &mut cursor)?;
        lng += next_delta(bytes, &mut cursor)?;
        path.push(Coordinate {
            latitude: lat as f64 / factor,
            longitude: lng as f64 / factor,
        });
    }

    Ok(path)
}

/// Decode many polylines in parallel, skipping the ones that fail.
///
/// Output order and length follow the input; a malformed entry maps to
/// `None` so one bad route geometry never discards the rest of a feed.
pub fn decode_bulk<S>(encoded: &[S]) -> Vec<Option<DecodedPath>>
where
    S: AsRef<str> + Sync,
{
    encoded
        .par_iter()
        .map(|entry| match decode(entry.as_ref()) {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("Skipping route geometry: {err}");
                None
            }
        })
        .collect()
}

/// Read one variable-length signed integer and advance the cursor past
/// it. Characters outside the `?`-offset alphabet are not rejected;
/// only running out of input mid-group is an error.
fn next_delta(bytes: &[u8], cursor: &mut usize) -> Result<i64, Error> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&raw) = bytes.get(*cursor) else {
            return Err(Error::MalformedPolyline(*cursor));
        };
        *cursor += 1;

        let byte = i64::from(raw) - 63;
        // A group encoding a finite delta never shifts past 64 bits;
        // excess chunks of a longer run are dropped.
        if shift < 64 {
            result |= (byte & 0x1f).wrapping_shl(shift);
        }
        shift += 5;

        if byte < 0x20 {
            break;
        }
    }

    if result & 1 != 0 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}

//! serde helpers for JSON payloads carrying encoded polylines
//!
//! Transit APIs deliver route geometry as an `encoded_polyline` string
//! field; these deserializers decode it in place while the payload is
//! being read.

use serde::Deserialize;

use crate::codec::decode;
use crate::model::DecodedPath;

/// Deserialize an encoded polyline string field into a decoded path.
pub fn deserialize_polyline<'de, D>(deserializer: D) -> Result<DecodedPath, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    decode(&encoded).map_err(serde::de::Error::custom)
}

/// Deserialize a nullable encoded polyline field.
///
/// Feeds signal missing geometry with an empty string as often as with
/// `null`; both map to `None`.
pub fn deserialize_optional_polyline<'de, D>(
    deserializer: D,
) -> Result<Option<DecodedPath>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let encoded: Option<String> = Option::deserialize(deserializer)?;
    match encoded {
        Some(s) if !s.is_empty() => decode(&s).map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

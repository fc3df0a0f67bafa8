use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Encoded polyline truncated inside a coordinate group at byte {0}")]
    MalformedPolyline(usize),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

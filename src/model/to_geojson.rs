//! GeoJSON export of decoded paths

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};

use crate::Error;
use crate::model::{Coordinate, DecodedPath, line_string_from_path};

/// `LineString` geometry in GeoJSON axis order (longitude first).
pub fn path_to_geometry(path: &[Coordinate]) -> Geometry {
    Geometry::new(GeoJsonValue::from(&line_string_from_path(path)))
}

pub fn path_to_feature(path: &[Coordinate]) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(path_to_geometry(path)),
        id: None,
        properties: None,
        foreign_members: None,
    }
}

/// One feature per path, e.g. every route shape of a feed in a single
/// collection.
pub fn paths_to_feature_collection(paths: &[DecodedPath]) -> FeatureCollection {
    FeatureCollection {
        features: paths.iter().map(|path| path_to_feature(path)).collect(),
        bbox: None,
        foreign_members: None,
    }
}

pub fn path_to_geojson_string(path: &[Coordinate]) -> Result<String, Error> {
    serde_json::to_string(&path_to_feature(path)).map_err(|e| Error::GeoJsonError(e.to_string()))
}

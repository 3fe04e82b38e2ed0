use crate::api::cell::GeohashCell;
use crate::error::GeohashError;
use geojson::{Feature, FeatureCollection, JsonObject, feature::Id};
use serde_json::json;
use wkt::ToWkt;

/// Output encodings for cell geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

/// Formats the cell polygon as WKT.
pub fn cell_to_wkt(cell: &GeohashCell) -> String {
    cell.to_polygon().wkt_string()
}

/// Formats the cell polygon as a GeoJSON geometry object.
pub fn cell_to_geojson(cell: &GeohashCell) -> String {
    geojson::Geometry::from(&cell.to_polygon()).to_string()
}

/// Formats the cell polygon in the requested format.
pub fn format_cell(cell: &GeohashCell, format: GeometryFormat) -> String {
    match format {
        GeometryFormat::Wkt => cell_to_wkt(cell),
        GeometryFormat::GeoJson => cell_to_geojson(cell),
    }
}

/// Builds a GeoJSON feature for the cell.
///
/// The feature id is the geohash; `geohash` and `precision` are also
/// carried as properties.
pub fn cell_to_feature(cell: &GeohashCell) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), json!(cell.hash));
    properties.insert("precision".to_string(), json!(cell.precision()));

    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(&cell.to_polygon())),
        id: Some(Id::String(cell.hash.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Serializes cells as a GeoJSON FeatureCollection string.
pub fn cells_to_feature_collection(cells: &[GeohashCell]) -> Result<String, GeohashError> {
    let collection = FeatureCollection {
        bbox: None,
        features: cells.iter().map(cell_to_feature).collect(),
        foreign_members: None,
    };
    serde_json::to_string(&collection).map_err(|e| GeohashError::SerializationError(e.to_string()))
}

use crate::api::cell::GeohashCell;
use crate::error::GeohashError;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

fn parse_error(e: impl std::fmt::Display) -> GeohashError {
    GeohashError::GeometryParseError(e.to_string())
}

/// Parses lon/lat geometry text. Input starting with `{` is GeoJSON, anything else WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeohashError> {
    match s.trim() {
        json if json.starts_with('{') => parse_geojson(json),
        text => parse_wkt(text),
    }
}

/// Parses GeoJSON into a `geo_types::Geometry`.
///
/// A feature yields its geometry; a feature collection yields a
/// `GeometryCollection` of every feature that has one.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let geojson: GeoJson = s.parse().map_err(parse_error)?;

    let geometries = match geojson {
        GeoJson::Geometry(geom) => return Geometry::try_from(geom).map_err(parse_error),
        GeoJson::Feature(feat) => {
            let geom = feat
                .geometry
                .ok_or_else(|| parse_error("Feature has no geometry"))?;
            return Geometry::try_from(geom).map_err(parse_error);
        }
        GeoJson::FeatureCollection(fc) => fc
            .features
            .into_iter()
            .filter_map(|feat| feat.geometry)
            .map(|geom| Geometry::try_from(geom).map_err(parse_error))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(Geometry::GeometryCollection(GeometryCollection::new_from(
        geometries,
    )))
}

/// Parses WKT into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(parse_error)?;
    Geometry::try_from(wkt).map_err(|_| parse_error("WKT has no geo-types equivalent"))
}

/// Parses a WKT or GeoJSON string (lon/lat) and returns the cells it covers.
///
/// # Example
/// ```
/// use geohash_rs::cells_from_geometry_str;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cells = cells_from_geometry_str("POINT(-76 39)", 5)?;
/// assert_eq!(cells[0].hash, "dqcvy");
/// # Ok(())
/// # }
/// ```
pub fn cells_from_geometry_str(
    s: &str,
    precision: usize,
) -> Result<Vec<GeohashCell>, GeohashError> {
    GeohashCell::from_geometry(parse_geometry(s)?, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), GeohashError> {
        let json = r#"{"type":"Point","coordinates":[-0.1278,51.5074]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-0.1278)).abs() < 1e-9);
                assert!((pt.y() - 51.5074).abs() < 1e-9);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), GeohashError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-76.0,39.0]}}"#;
        assert!(matches!(parse_geometry(json)?, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_collection() -> Result<(), GeohashError> {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-76.0,39.0]}},
            {"type":"Feature","properties":{},"geometry":null},
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-0.1278,51.5074]}}
        ]}"#;
        match parse_geometry(json)? {
            Geometry::GeometryCollection(gc) => assert_eq!(gc.0.len(), 2),
            _ => panic!("Expected GeometryCollection"),
        }

        let cells = cells_from_geometry_str(json, 4)?;
        let hashes: Vec<&str> = cells.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["dqcv", "gcpv"]);
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_without_geometry() {
        let json = r#"{"type":"Feature","properties":{},"geometry":null}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(GeohashError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_parse_wkt_linestring() -> Result<(), GeohashError> {
        let geom = parse_geometry("LINESTRING(-0.1 51.5, -0.2 51.6)")?;
        match geom {
            Geometry::LineString(line) => assert_eq!(line.0.len(), 2),
            _ => panic!("Expected LineString"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_geometry("NOT A GEOMETRY").is_err());
        assert!(parse_geometry("{not json").is_err());
    }

    #[test]
    fn test_cells_from_geometry_str() -> Result<(), GeohashError> {
        let from_wkt = cells_from_geometry_str("POINT(-0.1278 51.5074)", 7)?;
        let from_json = cells_from_geometry_str(
            r#"{"type":"Point","coordinates":[-0.1278,51.5074]}"#,
            7,
        )?;

        assert_eq!(from_wkt.len(), 1);
        assert_eq!(from_wkt[0].hash, "gcpvj0d");
        assert_eq!(from_wkt, from_json);
        Ok(())
    }
}

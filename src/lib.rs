//! # geohash-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` - Coordinate Codec
//!
//! ```
//! use geohash_rs::{decode, encode, encode_with_precision};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! assert_eq!(encode(39.0, -76.0), "dqcvyedrrwut");
//! assert_eq!(encode_with_precision(39.0, -76.0, 5), "dqcvy");
//!
//! let bbox = decode("dqcvy")?;
//! println!("{:?} .. {:?}", bbox.south_west(), bbox.north_east());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `calculate_adjacent` - Neighbor Lookup
//!
//! ```
//! use geohash_rs::{Direction, calculate_adjacent, calculate_all_adjacent};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! assert_eq!(calculate_adjacent("dqcjq", Direction::Top)?, "dqcjw");
//!
//! // [top, right, bottom, top-right, top-left, left, bottom-right, bottom-left]
//! let all = calculate_all_adjacent("dqcjq")?;
//! assert_eq!(all.len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeohashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::{GeohashCell, GeometryFormat, format_cell};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_wgs84(&(-2.248, 53.481), 9)?;
//! println!("{}", cell.hash);
//! println!("{}", format_cell(&cell, GeometryFormat::Wkt));
//! # Ok(())
//! # }
//! ```
//!
//! Coordinates passed through the [`Coordinate`] trait are `(lon, lat)`;
//! the plain `encode` functions take `(lat, lng)`.
//!

pub mod api;
pub mod coord;
pub mod core;
pub mod error;
pub mod geom;
pub mod index;

pub use api::{BoundingBox, GeohashCell, LatLng};
pub use coord::Coordinate;
pub use crate::core::{
    ALPHABET, BORDERS, DEFAULT_PRECISION, LAT_RANGE, LNG_RANGE, NEIGHBORS, decode, encode,
    encode_coord, encode_with_precision,
};
pub use error::GeohashError;
pub use geom::{
    GeometryFormat, cell_to_feature, cell_to_geojson, cell_to_wkt, cells_from_geometry_str,
    cells_to_feature_collection, format_cell, parse_geojson, parse_geometry, parse_wkt,
};
pub use index::{
    Direction, Neighbors, calculate_adjacent, calculate_adjacent_str, calculate_all_adjacent,
    neighbors,
};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeohashError> {
        let hash = encode_with_precision(39.5507, -76.6406, 5);
        assert_eq!(hash, "dr18b");

        let bbox = decode(&hash)?;
        assert!(bbox.contains(&(-76.6406, 39.5507)));

        let right = calculate_adjacent(&hash, Direction::Right)?;
        let right_box = decode(&right)?;
        assert_eq!(right_box.south_west().lng(), bbox.north_east().lng());
        assert_eq!(calculate_adjacent(&right, Direction::Left)?, hash);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), GeohashError> {
        let pt = point! { x: -76.0, y: 39.0 };
        let cell = GeohashCell::from_wgs84(&pt, 12)?;
        assert_eq!(cell.hash, encode(39.0, -76.0));
        assert!(cell.to_polygon().exterior().coords().count() == 5);
        Ok(())
    }

    #[test]
    fn test_neighbors_surround_cell() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("dr12")?;
        let ring: Vec<GeohashCell> = calculate_all_adjacent(&cell.hash)?
            .iter()
            .map(|h| GeohashCell::from_hash(h))
            .collect::<Result<_, _>>()?;

        assert_eq!(ring.len(), 8);
        for neighbor in &ring {
            assert_ne!(neighbor.hash, cell.hash);
            assert_eq!(neighbor.precision(), cell.precision());
            let dlat = (neighbor.center().lat() - cell.center().lat()).abs();
            let dlng = (neighbor.center().lng() - cell.center().lng()).abs();
            assert!(dlat <= 2.0 * cell.bbox.lat_error() + 1e-12);
            assert!(dlng <= 2.0 * cell.bbox.lng_error() + 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_reference_scenarios() -> Result<(), GeohashError> {
        let d = decode("d")?;
        assert_eq!((d.south_west().lat(), d.south_west().lng()), (0.0, -90.0));
        assert_eq!((d.north_east().lat(), d.north_east().lng()), (45.0, -45.0));
        assert_eq!((d.center().lat(), d.center().lng()), (22.5, -67.5));

        assert_eq!(encode(39.55078125, -76.640625), "dr12zzzzzzzz");
        assert_eq!(encode(39.0, -76.0), "dqcvyedrrwut");
        assert_eq!(encode_with_precision(39.5507, -76.6406, 5), "dr18b");
        Ok(())
    }

    #[test]
    fn test_string_directions() -> Result<(), GeohashError> {
        assert_eq!(calculate_adjacent_str("dqcjq", "bottom")?, "dqcjn");
        assert!(matches!(
            calculate_adjacent_str("dqcjq", "north"),
            Err(GeohashError::InvalidDirection(_))
        ));
        Ok(())
    }
}

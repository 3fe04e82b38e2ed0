use crate::api::bbox::{BoundingBox, LatLng};
use crate::coord::Coordinate;
use crate::core::constants::ALPHABET;
use crate::core::{decode, encode_coord, normalize};
use crate::error::GeohashError;
use crate::index::{Direction, Neighbors, calculate_adjacent, neighbors};
use geo::Centroid;
use geo_types::{Geometry, LineString, Polygon};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single geohash cell.
///
/// Each `GeohashCell` pairs a lowercase geohash with the bounding box it
/// decodes to.
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// // Coordinates are (lon, lat)
/// let cell = GeohashCell::from_wgs84(&(-0.1278, 51.5074), 7)?;
/// println!("Geohash: {}", cell.hash);
/// println!("Center: ({}, {})", cell.center().lat(), cell.center().lng());
///
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CellRecord")]
pub struct GeohashCell {
    /// Lowercase geohash string
    pub hash: String,
    /// Region covered by the hash
    pub bbox: BoundingBox,
}

/// Serialized form read back by `GeohashCell`; the box is always recomputed.
#[derive(Deserialize)]
struct CellRecord {
    hash: String,
}

impl TryFrom<CellRecord> for GeohashCell {
    type Error = GeohashError;

    fn try_from(record: CellRecord) -> Result<Self, Self::Error> {
        Self::from_hash(&record.hash)
    }
}

impl GeohashCell {
    /// Create a GeohashCell from an existing geohash
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_hash("DR12")?;
    /// assert_eq!(cell.hash, "dr12");
    /// assert_eq!(cell.precision(), 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, GeohashError> {
        let hash: String = normalize(hash)?.into_iter().map(char::from).collect();
        let bbox = decode(&hash)?;
        Ok(Self { hash, bbox })
    }

    /// Create a GeohashCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// // From tuple
    /// let cell = GeohashCell::from_wgs84(&(-76.0, 39.0), 12)?;
    /// // From Point
    /// let cell = GeohashCell::from_wgs84(&Point::new(-76.0, 39.0), 12)?;
    /// assert_eq!(cell.hash, "dqcvyedrrwut");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, precision: usize) -> Result<Self, GeohashError> {
        let hash = encode_coord(coord, precision);
        let bbox = decode(&hash)?;
        Ok(Self { hash, bbox })
    }

    /// Create cells at every vertex of a LineString, in order, without duplicates.
    pub fn from_line_string(line: &LineString, precision: usize) -> Result<Vec<Self>, GeohashError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(line.0.len());
        let mut cells = Vec::with_capacity(line.0.len());

        for coord in line.coords() {
            let cell = Self::from_wgs84(coord, precision)?;
            if seen.insert(cell.hash.clone()) {
                cells.push(cell);
            }
        }

        Ok(cells)
    }

    fn from_polygon(poly: &Polygon, precision: usize) -> Result<Option<Self>, GeohashError> {
        poly.centroid()
            .map(|centroid| Self::from_wgs84(&centroid, precision))
            .transpose()
    }

    /// Create GeohashCells from an arbitrary `geo_types::Geometry` in WGS84.
    ///
    /// Points produce a single cell and polygons the cell of their centroid;
    /// lines produce one cell per distinct vertex cell and collections recurse.
    pub fn from_geometry(geom: Geometry<f64>, precision: usize) -> Result<Vec<Self>, GeohashError> {
        match geom {
            Geometry::Point(pt) => Ok(vec![Self::from_wgs84(&pt, precision)?]),
            Geometry::MultiPoint(mp) => mp
                .0
                .iter()
                .map(|pt| Self::from_wgs84(pt, precision))
                .collect(),
            Geometry::LineString(line) => Self::from_line_string(&line, precision),
            Geometry::MultiLineString(mls) => {
                let mut all_cells = Vec::new();
                for line in &mls.0 {
                    all_cells.extend(Self::from_line_string(line, precision)?);
                }
                Ok(all_cells)
            }
            Geometry::Polygon(poly) => Ok(Self::from_polygon(&poly, precision)?
                .into_iter()
                .collect()),
            Geometry::MultiPolygon(mp) => {
                let mut cells = Vec::new();
                for poly in &mp.0 {
                    cells.extend(Self::from_polygon(poly, precision)?);
                }
                Ok(cells)
            }
            Geometry::GeometryCollection(gc) => {
                let mut all_cells = Vec::new();
                for g in gc.0 {
                    all_cells.extend(Self::from_geometry(g, precision)?);
                }
                Ok(all_cells)
            }
            other => {
                debug!("Unsupported geometry: {:?}", other);
                Err(GeohashError::GeometryParseError(
                    "Unsupported geometry type".to_string(),
                ))
            }
        }
    }

    /// Number of characters in the hash.
    pub fn precision(&self) -> usize {
        self.hash.chars().count()
    }

    pub fn center(&self) -> &LatLng {
        self.bbox.center()
    }

    /// Whether the (lon/lat) coordinate falls inside this cell, edges included.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bbox.contains(coord)
    }

    /// Converts this cell to a rectangular polygon in lon/lat order.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bbox.to_polygon()
    }

    /// Returns the neighboring cell in `direction`.
    pub fn adjacent(&self, direction: Direction) -> Result<Self, GeohashError> {
        Self::from_hash(&calculate_adjacent(&self.hash, direction)?)
    }

    /// Returns the hashes of all eight surrounding cells.
    pub fn neighbors(&self) -> Result<Neighbors, GeohashError> {
        neighbors(&self.hash)
    }

    /// Returns the enclosing cell one character shorter, if any.
    pub fn parent(&self) -> Option<Self> {
        if self.precision() < 2 {
            return None;
        }
        let (last, _) = self.hash.char_indices().next_back()?;
        Self::from_hash(&self.hash[..last]).ok()
    }

    /// Returns the 32 cells one character longer, in alphabet order.
    pub fn children(&self) -> Result<Vec<Self>, GeohashError> {
        ALPHABET
            .iter()
            .map(|&c| {
                let mut hash = self.hash.clone();
                hash.push(char::from(c));
                Self::from_hash(&hash)
            })
            .collect()
    }
}

use crate::coord::Coordinate;
use geo_types::{Coord, Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Values are not range checked; out-of-range input is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Converts to a `geo_types::Point` with x = longitude, y = latitude.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl Coordinate for LatLng {
    fn x(&self) -> f64 {
        self.lng
    }
    fn y(&self) -> f64 {
        self.lat
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(ll: LatLng) -> Self {
        coord! { x: ll.lng, y: ll.lat }
    }
}

impl From<LatLng> for Point<f64> {
    fn from(ll: LatLng) -> Self {
        ll.to_point()
    }
}

impl From<Point<f64>> for LatLng {
    fn from(pt: Point<f64>) -> Self {
        Self::new(pt.y(), pt.x())
    }
}

/// The rectangular region a geohash denotes.
///
/// Built once by [`decode`](crate::decode); the center is the arithmetic
/// midpoint of the two corners.
///
/// # Example
///
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let bbox = decode("d")?;
/// assert_eq!(bbox.south_west().lat(), 0.0);
/// assert_eq!(bbox.north_east().lng(), -45.0);
/// assert_eq!(bbox.center().lat(), 22.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    sw: LatLng,
    ne: LatLng,
    center: LatLng,
}

impl BoundingBox {
    /// Builds a box from its south-west and north-east corners.
    pub fn new(sw: LatLng, ne: LatLng) -> Self {
        let center = LatLng::new((sw.lat + ne.lat) / 2.0, (sw.lng + ne.lng) / 2.0);
        Self { sw, ne, center }
    }

    /// Returns coordinates for the box's center.
    pub fn center(&self) -> &LatLng {
        &self.center
    }

    /// Returns coordinates for the box's south-west corner.
    pub fn south_west(&self) -> &LatLng {
        &self.sw
    }

    /// Returns coordinates for the box's north-east corner.
    pub fn north_east(&self) -> &LatLng {
        &self.ne
    }

    /// Half the box height in degrees.
    pub fn lat_error(&self) -> f64 {
        (self.ne.lat - self.sw.lat) / 2.0
    }

    /// Half the box width in degrees.
    pub fn lng_error(&self) -> f64 {
        (self.ne.lng - self.sw.lng) / 2.0
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, point: &impl Coordinate) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&point.y())
            && (self.sw.lng..=self.ne.lng).contains(&point.x())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(Coord::from(self.sw), Coord::from(self.ne))
    }

    /// Converts the box to a closed five-vertex polygon in lon/lat order.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundingBox {
        BoundingBox::new(
            LatLng::new(39.375, -76.9921875),
            LatLng::new(39.55078125, -76.640625),
        )
    }

    #[test]
    fn test_center_is_midpoint() {
        let bbox = sample();
        assert_eq!(bbox.center().lat(), 39.462890625);
        assert_eq!(bbox.center().lng(), -76.81640625);
    }

    #[test]
    fn test_errors_are_half_extents() {
        let bbox = sample();
        assert_eq!(bbox.lat_error(), 0.087890625);
        assert_eq!(bbox.lng_error(), 0.17578125);
    }

    #[test]
    fn test_contains_includes_edges() {
        let bbox = sample();
        assert!(bbox.contains(bbox.center()));
        assert!(bbox.contains(bbox.south_west()));
        assert!(bbox.contains(bbox.north_east()));
        assert!(bbox.contains(&(-76.8, 39.4)));
        assert!(!bbox.contains(&(-76.8, 40.0)));
        assert!(!bbox.contains(&Point::new(-77.0, 39.4)));
    }

    #[test]
    fn test_to_polygon() {
        let polygon = sample().to_polygon();
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
    }

    #[test]
    fn test_rect_uses_lng_as_x() {
        let rect = sample().to_rect();
        assert_eq!(rect.min().x, -76.9921875);
        assert_eq!(rect.min().y, 39.375);
        assert_eq!(rect.max().x, -76.640625);
        assert_eq!(rect.max().y, 39.55078125);
    }

    #[test]
    fn test_latlng_point_conversion() {
        let ll = LatLng::new(53.481, -2.248);
        let pt: Point<f64> = ll.into();
        assert_eq!(pt.x(), -2.248);
        assert_eq!(pt.y(), 53.481);
        assert_eq!(LatLng::from(pt), ll);
    }

    #[test]
    fn test_serde_roundtrip() {
        let bbox = sample();
        let json = serde_json::to_string(&bbox).unwrap();
        assert!(json.contains("\"sw\""));
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bbox);
    }
}

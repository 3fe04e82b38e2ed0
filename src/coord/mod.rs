use geo_types::{Coord, Point};

/// Trait for types that can provide WGS84 x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples in `(lon, lat)` order,
/// `geo_types::Point<f64>`, `geo_types::Coord<f64>` and [`LatLng`](crate::LatLng).
/// This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

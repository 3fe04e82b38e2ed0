pub mod bbox;
pub mod cell;

pub use bbox::{BoundingBox, LatLng};
pub use cell::GeohashCell;

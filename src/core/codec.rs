use crate::api::bbox::{BoundingBox, LatLng};
use crate::coord::Coordinate;
use crate::core::alphabet::char_value;
use crate::core::constants::{ALPHABET, BITS, DEFAULT_PRECISION, LAT_RANGE, LNG_RANGE};
use crate::error::GeohashError;

/// Encodes a coordinate as a 12-character geohash.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// assert_eq!(encode(39.55078125, -76.640625), "dr12zzzzzzzz");
/// ```
pub fn encode(lat: f64, lng: f64) -> String {
    encode_with_precision(lat, lng, DEFAULT_PRECISION)
}

/// Encodes a coordinate as a geohash of `precision` characters.
///
/// Bisects the longitude and latitude ranges alternately, starting with
/// longitude. A coordinate strictly above the midpoint yields a 1 bit. Every
/// five bits, most significant first, select one alphabet character.
///
/// A shorter precision is always a prefix of a longer one for the same input.
/// Out-of-range or non-finite coordinates saturate at the range edges rather
/// than fail.
///
/// # Example
/// ```
/// use geohash_rs::encode_with_precision;
///
/// assert_eq!(encode_with_precision(39.5507, -76.6406, 5), "dr18b");
/// ```
pub fn encode_with_precision(lat: f64, lng: f64, precision: usize) -> String {
    let mut lat_range = LAT_RANGE;
    let mut lng_range = LNG_RANGE;
    let mut is_lng = true;
    let mut geohash = String::with_capacity(precision);

    while geohash.len() < precision {
        let mut ch = 0u8;
        for &bit in BITS.iter() {
            let (range, value) = if is_lng {
                (&mut lng_range, lng)
            } else {
                (&mut lat_range, lat)
            };
            let mid = (range[0] + range[1]) / 2.0;
            if value > mid {
                ch |= bit;
                range[0] = mid;
            } else {
                range[1] = mid;
            }
            is_lng = !is_lng;
        }
        geohash.push(ALPHABET[ch as usize] as char);
    }

    geohash
}

/// Encodes any [`Coordinate`] (x = longitude, y = latitude).
///
/// # Example
/// ```
/// use geohash_rs::encode_coord;
/// use geo_types::Point;
///
/// let from_tuple = encode_coord(&(-76.0, 39.0), 12);
/// let from_point = encode_coord(&Point::new(-76.0, 39.0), 12);
/// assert_eq!(from_tuple, "dqcvyedrrwut");
/// assert_eq!(from_tuple, from_point);
/// ```
pub fn encode_coord(coord: &impl Coordinate, precision: usize) -> String {
    encode_with_precision(coord.y(), coord.x(), precision)
}

/// Decodes a geohash to the bounding box it denotes.
///
/// Input is case-insensitive. The empty string decodes to the whole globe.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let bbox = decode("dr12")?;
/// assert_eq!(bbox.south_west().lat(), 39.375);
/// assert_eq!(bbox.north_east().lng(), -76.640625);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidCharacter`] - A character is outside the base-32 alphabet
pub fn decode(geohash: &str) -> Result<BoundingBox, GeohashError> {
    let mut lat_range = LAT_RANGE;
    let mut lng_range = LNG_RANGE;
    let mut is_lng = true;

    for (position, character) in geohash.chars().enumerate() {
        let cd = char_value(character).ok_or(GeohashError::InvalidCharacter {
            character,
            position,
        })?;
        for &bit in BITS.iter() {
            let range = if is_lng {
                &mut lng_range
            } else {
                &mut lat_range
            };
            refine_interval(range, cd, bit);
            is_lng = !is_lng;
        }
    }

    Ok(BoundingBox::new(
        LatLng::new(lat_range[0], lng_range[0]),
        LatLng::new(lat_range[1], lng_range[1]),
    ))
}

fn refine_interval(interval: &mut [f64; 2], cd: u8, mask: u8) {
    let mid = (interval[0] + interval[1]) / 2.0;
    if cd & mask != 0 {
        interval[0] = mid;
    } else {
        interval[1] = mid;
    }
}

mod alphabet;
pub mod codec;
pub mod constants;

pub(crate) use alphabet::normalize;
pub use codec::{decode, encode, encode_coord, encode_with_precision};
pub use constants::{ALPHABET, BORDERS, DEFAULT_PRECISION, LAT_RANGE, LNG_RANGE, NEIGHBORS};

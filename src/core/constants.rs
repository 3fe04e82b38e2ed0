/// Base-32 geohash alphabet (no `a`, `i`, `l`, `o`)
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bit weights of the five bits packed into each character, most significant first
pub(crate) const BITS: [u8; 5] = [16, 8, 4, 2, 1];

/// Precision used by [`encode`](crate::encode) when none is given
pub const DEFAULT_PRECISION: usize = 12;

/// Latitude range [min, max] in degrees
pub const LAT_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude range [min, max] in degrees
pub const LNG_RANGE: [f64; 2] = [-180.0, 180.0];

/// Neighbor lookup table indexed by `[direction][parity]`.
///
/// Direction order is top, right, bottom, left; parity 0 is an even-length
/// hash and 1 an odd-length one. The position of the last character in the
/// row gives the alphabet index of its neighbor.
pub const NEIGHBORS: [[&str; 2]; 4] = [
    [
        "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        "bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    [
        "bc01fg45238967deuvhjyznpkmstqrwx",
        "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    [
        "14365h7k9dcfesgujnmqp0r2twvyx8zb",
        "238967debc01fg45kmstqrwxuvhjyznp",
    ],
    [
        "238967debc01fg45kmstqrwxuvhjyznp",
        "14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

/// Border lookup table indexed by `[direction][parity]`.
///
/// Characters listed here sit on the edge of their parent cell in that
/// direction, so their neighbor lives in the adjacent parent.
pub const BORDERS: [[&str; 2]; 4] = [
    ["prxz", "bcfguvyz"],
    ["bcfguvyz", "prxz"],
    ["028b", "0145hjnp"],
    ["0145hjnp", "028b"],
];

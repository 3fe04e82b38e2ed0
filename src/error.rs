/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// The geohash contains a character outside the base-32 alphabet.
    InvalidCharacter {
        /// The offending character as it appeared in the input.
        character: char,
        /// Zero-based character offset within the input.
        position: usize,
    },
    /// The direction is not one of `top`, `right`, `bottom` or `left`.
    InvalidDirection(String),
    /// A neighbor lookup carried past the first character (pole or antimeridian).
    BoundaryExceeded,
    /// Failed to parse geometry from string (GeoJSON or WKT), or the geometry kind is unsupported.
    GeometryParseError(String),
    /// Failed to serialize a cell to an output format.
    SerializationError(String),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid geohash character '{}' at position {}",
                character, position
            ),
            GeohashError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            GeohashError::BoundaryExceeded => {
                write!(f, "Adjacent cell lies beyond the edge of the coordinate system")
            }
            GeohashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            GeohashError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {}

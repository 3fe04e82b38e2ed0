use crate::core::constants::{ALPHABET, BORDERS, NEIGHBORS};
use crate::core::normalize;
use crate::error::GeohashError;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions a neighbor can be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in table order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        }
    }

    fn table_index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    /// Parses `top`, `right`, `bottom` or `left`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeohashError::InvalidDirection(s.to_string()))
    }
}

/// The eight cells surrounding a geohash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
    pub top_right: String,
    pub top_left: String,
    pub bottom_right: String,
    pub bottom_left: String,
}

impl Neighbors {
    /// Returns the hashes as
    /// `[top, right, bottom, top_right, top_left, left, bottom_right, bottom_left]`.
    pub fn to_vec(&self) -> Vec<String> {
        vec![
            self.top.clone(),
            self.right.clone(),
            self.bottom.clone(),
            self.top_right.clone(),
            self.top_left.clone(),
            self.left.clone(),
            self.bottom_right.clone(),
            self.bottom_left.clone(),
        ]
    }
}

/// Calculates the geohash adjacent to `geohash` in `direction`.
///
/// The result has the same length as the input and is always lowercase.
///
/// # Process
///
/// 1. Splits off the last character; parity is the input length modulo 2
/// 2. If the last character lies on the border of its parent in that
///    direction, the parent prefix is shifted first (carry)
/// 3. Appends the neighbor of the last character from the lookup table
///
/// # Example
/// ```
/// use geohash_rs::{Direction, calculate_adjacent};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(calculate_adjacent("dqcjq", Direction::Top)?, "dqcjw");
/// assert_eq!(calculate_adjacent("dqcjqc", Direction::Right)?, "dqcjr1");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidCharacter`] - A character is outside the base-32 alphabet
/// - [`GeohashError::BoundaryExceeded`] - The neighbor would cross a pole or the
///   antimeridian, or the input is empty
pub fn calculate_adjacent(geohash: &str, direction: Direction) -> Result<String, GeohashError> {
    let hash = normalize(geohash)?;
    let adjacent = adjacent_bytes(&hash, direction).inspect_err(|e| {
        if *e == GeohashError::BoundaryExceeded {
            debug!("No {} neighbor for geohash '{}'", direction, geohash);
        }
    })?;
    Ok(adjacent.into_iter().map(char::from).collect())
}

/// Same as [`calculate_adjacent`] with the direction given by name.
///
/// # Errors
///
/// - [`GeohashError::InvalidDirection`] - `direction` is not `top`, `right`,
///   `bottom` or `left`
/// - Any error of [`calculate_adjacent`]
pub fn calculate_adjacent_str(geohash: &str, direction: &str) -> Result<String, GeohashError> {
    calculate_adjacent(geohash, direction.parse()?)
}

/// Calculates all eight surrounding geohashes.
///
/// Order is `[top, right, bottom, top-right, top-left, left, bottom-right,
/// bottom-left]`. Use [`neighbors`] for named access.
pub fn calculate_all_adjacent(geohash: &str) -> Result<Vec<String>, GeohashError> {
    Ok(neighbors(geohash)?.to_vec())
}

/// Calculates all eight surrounding geohashes as a [`Neighbors`] value.
///
/// Diagonals are the right and left neighbors of the top and bottom cells.
///
/// # Example
/// ```
/// use geohash_rs::neighbors;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let n = neighbors("ezs42")?;
/// assert_eq!(n.top, "ezs48");
/// assert_eq!(n.bottom_left, "ezefp");
/// # Ok(())
/// # }
/// ```
pub fn neighbors(geohash: &str) -> Result<Neighbors, GeohashError> {
    let top = calculate_adjacent(geohash, Direction::Top)?;
    let bottom = calculate_adjacent(geohash, Direction::Bottom)?;

    Ok(Neighbors {
        top_right: calculate_adjacent(&top, Direction::Right)?,
        top_left: calculate_adjacent(&top, Direction::Left)?,
        bottom_right: calculate_adjacent(&bottom, Direction::Right)?,
        bottom_left: calculate_adjacent(&bottom, Direction::Left)?,
        right: calculate_adjacent(geohash, Direction::Right)?,
        left: calculate_adjacent(geohash, Direction::Left)?,
        top,
        bottom,
    })
}

// Recursion depth is bounded by the hash length.
fn adjacent_bytes(hash: &[u8], direction: Direction) -> Result<Vec<u8>, GeohashError> {
    let Some((&last, base)) = hash.split_last() else {
        return Err(GeohashError::BoundaryExceeded);
    };
    let dir = direction.table_index();
    let parity = hash.len() % 2;

    let mut adjacent = if BORDERS[dir][parity].as_bytes().contains(&last) {
        trace!(
            "Carrying {} at depth {} on '{}'",
            direction,
            hash.len(),
            last as char
        );
        adjacent_bytes(base, direction)?
    } else {
        base.to_vec()
    };

    let index = NEIGHBORS[dir][parity]
        .bytes()
        .position(|c| c == last)
        .ok_or(GeohashError::InvalidCharacter {
            character: last as char,
            position: hash.len() - 1,
        })?;
    adjacent.push(ALPHABET[index]);

    Ok(adjacent)
}

use crate::core::constants::ALPHABET;
use crate::error::GeohashError;

/// Returns the 5-bit value of a geohash character, ignoring ASCII case.
pub(crate) fn char_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let lower = c.to_ascii_lowercase() as u8;
    ALPHABET.iter().position(|&a| a == lower).map(|i| i as u8)
}

/// Lower-cases a geohash and checks every character against the alphabet.
///
/// The returned bytes are guaranteed to be members of [`ALPHABET`].
pub(crate) fn normalize(geohash: &str) -> Result<Vec<u8>, GeohashError> {
    geohash
        .chars()
        .enumerate()
        .map(|(position, character)| {
            char_value(character)
                .map(|value| ALPHABET[value as usize])
                .ok_or(GeohashError::InvalidCharacter {
                    character,
                    position,
                })
        })
        .collect()
}

//! Registration counter (digits 5..=8) and the gender parity digit.

use super::error::RnokppError;
use super::types::Gender;

/// Digits that mark a male holder when placed at position 8.
pub const MALE_DIGITS: [u8; 5] = [1, 3, 5, 7, 9];

/// Digits that mark a female holder when placed at position 8.
pub const FEMALE_DIGITS: [u8; 5] = [0, 2, 4, 6, 8];

/// Largest sequence value that fits into the three leading counter digits.
pub const MAX_SEQUENCE: u16 = 999;

/// Gender encoded by the parity digit: odd is male, even is female.
pub fn decode_gender(digit: u8) -> Gender {
    if digit % 2 == 1 {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Digits allowed at position 8 for `gender`.
pub fn parity_digits(gender: Gender) -> &'static [u8; 5] {
    match gender {
        Gender::Male => &MALE_DIGITS,
        Gender::Female => &FEMALE_DIGITS,
    }
}

/// Build the four counter digits for a given sequence and gender.
///
/// The sequence occupies the first three digits. The last digit is picked
/// from the digits of the requested parity, cycling with the sequence.
pub fn encode_counter(sequence: u16, gender: Gender) -> Result<String, RnokppError> {
    if sequence > MAX_SEQUENCE {
        return Err(RnokppError::CounterOutOfRange(sequence));
    }
    let parity = parity_digits(gender)[usize::from(sequence % 5)];
    Ok(format!("{sequence:03}{parity}"))
}

/// Four counter digits with three random leading digits.
#[cfg(feature = "generate")]
pub fn random_counter<R: rand::Rng + ?Sized>(rng: &mut R, gender: Gender) -> String {
    let sequence: u16 = rng.gen_range(0..=MAX_SEQUENCE);
    let digits = parity_digits(gender);
    let parity = digits[rng.gen_range(0..digits.len())];
    format!("{sequence:03}{parity}")
}

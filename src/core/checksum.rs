//! Control digit computation and structural validation.

use super::error::RnokppError;

/// Number of digits in an RNOKPP.
pub const RNOKPP_LEN: usize = 10;

/// Weights applied to digits 0..=8 when computing the control digit.
pub const CHECKSUM_WEIGHTS: [i32; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

/// Compute the control digit for the first nine digits of an RNOKPP.
///
/// The weighted sum is reduced modulo 11 (always non-negative); a remainder
/// of 10 maps to 0.
pub fn compute_checksum(digits: &[u8; 9]) -> u8 {
    let sum: i32 = digits
        .iter()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(&d, w)| i32::from(d) * w)
        .sum();
    // rem_euclid(11) is in 0..=10, so the cast is lossless
    (sum.rem_euclid(11) % 10) as u8
}

/// Split a string into its ten digits.
///
/// Any non-digit character is reported before the length is checked.
pub fn parse_digits(rnokpp: &str) -> Result<[u8; RNOKPP_LEN], RnokppError> {
    if !rnokpp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RnokppError::NotDigits);
    }
    let len = rnokpp.len();
    if len < RNOKPP_LEN {
        return Err(RnokppError::TooShort { len });
    }
    if len > RNOKPP_LEN {
        return Err(RnokppError::TooLong { len });
    }

    let mut digits = [0u8; RNOKPP_LEN];
    for (slot, b) in digits.iter_mut().zip(rnokpp.bytes()) {
        *slot = b - b'0';
    }
    Ok(digits)
}

/// Verify the control digit of already parsed digits.
pub(crate) fn verify_checksum(digits: &[u8; RNOKPP_LEN]) -> Result<(), RnokppError> {
    let mut head = [0u8; 9];
    head.copy_from_slice(&digits[..9]);
    let expected = compute_checksum(&head);
    let found = digits[9];
    if expected == found {
        Ok(())
    } else {
        Err(RnokppError::InvalidControlDigit { expected, found })
    }
}

/// Check that `rnokpp` is ten digits with a matching control digit.
///
/// The encoded birth date is not inspected; use
/// [`get_details`](super::get_details) for full validation.
pub fn is_valid(rnokpp: &str) -> bool {
    parse_digits(rnokpp)
        .and_then(|digits| verify_checksum(&digits))
        .is_ok()
}

/// Append the control digit to a string of nine ASCII digits.
#[cfg_attr(not(feature = "generate"), allow(dead_code))]
pub(crate) fn append_checksum(head: &mut String) {
    debug_assert!(head.len() == 9 && head.bytes().all(|b| b.is_ascii_digit()));
    let mut digits = [0u8; 9];
    for (slot, b) in digits.iter_mut().zip(head.bytes()) {
        *slot = b.wrapping_sub(b'0');
    }
    head.push(char::from(b'0' + compute_checksum(&digits)));
}

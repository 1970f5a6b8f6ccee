//! Queries over unvalidated input.
//!
//! Predicates return `false` and [`get_details`] returns
//! [`RnokppDetails::INVALID`] for malformed input instead of failing.

use super::checksum::parse_digits;
use super::counter::decode_gender;
use super::error::RnokppError;
use super::types::{Gender, Rnokpp, RnokppDetails};

/// Parse and fully validate an RNOKPP, reporting why it is invalid.
pub fn parse(rnokpp: &str) -> Result<Rnokpp, RnokppError> {
    rnokpp.parse()
}

/// Gender encoded in digit 8.
///
/// Only the format (ten digits) is checked; the control digit is not.
pub fn get_gender(rnokpp: &str) -> Result<Gender, RnokppError> {
    let digits = parse_digits(rnokpp)?;
    Ok(decode_gender(digits[8]))
}

/// Whether the number is well-formed and encodes a male holder.
pub fn is_male(rnokpp: &str) -> bool {
    get_gender(rnokpp).is_ok_and(Gender::is_male)
}

/// Whether the number is well-formed and encodes a female holder.
pub fn is_female(rnokpp: &str) -> bool {
    get_gender(rnokpp).is_ok_and(Gender::is_female)
}

/// Validate the control digit and birth date and decode the number.
pub fn get_details(rnokpp: &str) -> RnokppDetails {
    match parse(rnokpp) {
        Ok(r) => r.details(),
        Err(err) => {
            tracing::trace!(%err, "RNOKPP failed validation");
            RnokppDetails::INVALID
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn male_number() {
        assert_eq!(get_gender("3652504575").unwrap(), Gender::Male);
        assert!(is_male("3652504575"));
        assert!(!is_female("3652504575"));
    }

    #[test]
    fn female_number() {
        assert_eq!(get_gender("3068208400").unwrap(), Gender::Female);
        assert!(is_female("3068208400"));
        assert!(!is_male("3068208400"));
    }

    #[test]
    fn gender_of_malformed_input() {
        assert_eq!(get_gender("invalid"), Err(RnokppError::NotDigits));
        assert!(!is_male("invalid"));
        assert!(!is_female("invalid"));
    }

    #[test]
    fn details_of_valid_number() {
        let details = get_details("3652504575");
        assert!(details.is_valid);
        assert_eq!(details.gender, Some(Gender::Male));
        assert_eq!(details.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1));
    }

    #[test]
    fn details_of_invalid_number() {
        assert_eq!(get_details("3652504576"), RnokppDetails::INVALID);
        assert_eq!(get_details("1234567890"), RnokppDetails::INVALID);
        assert_eq!(get_details(""), RnokppDetails::INVALID);
    }
}

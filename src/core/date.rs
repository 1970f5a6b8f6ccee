//! Birth date encoding in the first five digits.
//!
//! Digits 0..=4 hold the number of the birth day counted from 01.01.1900,
//! which is day 1.

use chrono::{Days, NaiveDate};

use super::error::RnokppError;

/// Day 1 of the encoding.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Largest day number that fits into five digits.
pub const MAX_DAY_NUMBER: u32 = 99_999;

/// Day number of `date`, without range checks.
fn day_number(date: NaiveDate) -> i64 {
    (date - EPOCH).num_days() + 1
}

/// Last date whose day number fits into five digits.
pub fn last_encodable_date() -> NaiveDate {
    // 99 998 days after 1900-01-01 is well inside chrono's range
    EPOCH
        .checked_add_days(Days::new(u64::from(MAX_DAY_NUMBER - 1)))
        .unwrap_or(NaiveDate::MAX)
}

/// Encode `date` as a zero-padded 5-digit day number.
pub fn encode_date(date: NaiveDate) -> Result<String, RnokppError> {
    if date < EPOCH {
        return Err(RnokppError::DateBeforeEpoch(date));
    }
    let n = day_number(date);
    if n > i64::from(MAX_DAY_NUMBER) {
        return Err(RnokppError::DateOutOfRange(date));
    }
    Ok(format!("{n:05}"))
}

/// Decode a 5-digit day number back into a date.
pub fn decode_date(digits: &str) -> Result<NaiveDate, RnokppError> {
    if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RnokppError::InvalidDayNumber(digits.into()));
    }
    let n: u64 = digits
        .parse()
        .map_err(|_| RnokppError::InvalidDayNumber(digits.into()))?;
    if n == 0 {
        // Day 0 would be 31.12.1899
        return Err(RnokppError::InvalidDayNumber(digits.into()));
    }
    EPOCH
        .checked_add_days(Days::new(n - 1))
        .ok_or_else(|| RnokppError::InvalidDayNumber(digits.into()))
}

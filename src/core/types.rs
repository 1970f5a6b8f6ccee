use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::checksum::{parse_digits, verify_checksum};
use super::counter::decode_gender;
use super::date::decode_date;
use super::error::RnokppError;

/// Gender of the number holder, encoded by the parity of digit 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Odd parity digit.
    Male,
    /// Even parity digit.
    Female,
}

impl Gender {
    /// Whether this is [`Gender::Male`].
    pub fn is_male(self) -> bool {
        self == Self::Male
    }

    /// Whether this is [`Gender::Female`].
    pub fn is_female(self) -> bool {
        self == Self::Female
    }

    /// Lowercase English name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Pick a gender with equal probability.
    #[cfg(feature = "generate")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information decoded from an RNOKPP.
///
/// `gender` and `birth_date` are only present when `is_valid` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RnokppDetails {
    pub is_valid: bool,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
}

impl RnokppDetails {
    /// Details of a number that failed validation.
    pub const INVALID: Self = Self {
        is_valid: false,
        gender: None,
        birth_date: None,
    };

    pub(crate) fn valid(gender: Gender, birth_date: NaiveDate) -> Self {
        Self {
            is_valid: true,
            gender: Some(gender),
            birth_date: Some(birth_date),
        }
    }
}

impl fmt::Display for RnokppDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_valid, self.gender, self.birth_date) {
            (true, Some(gender), Some(date)) => {
                write!(f, "valid, {}, {}", gender, date.format("%d.%m.%Y"))
            }
            _ => f.write_str("invalid"),
        }
    }
}

/// A fully validated RNOKPP.
///
/// Construction checks the length, the control digit and the encoded
/// birth date, so every accessor is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rnokpp {
    value: String,
    gender: Gender,
    birth_date: NaiveDate,
}

impl Rnokpp {
    /// The ten digits as a string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Gender encoded by digit 8.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Birth date encoded by digits 0..=4.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// The 4-digit registration counter (digits 5..=8).
    pub fn counter(&self) -> &str {
        &self.value[5..9]
    }

    /// The control digit.
    pub fn control_digit(&self) -> u8 {
        self.value.as_bytes()[9] - b'0'
    }

    /// Decoded details; always valid.
    pub fn details(&self) -> RnokppDetails {
        RnokppDetails::valid(self.gender, self.birth_date)
    }

    /// Consume the number and return its digits.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl FromStr for Rnokpp {
    type Err = RnokppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = parse_digits(s)?;
        verify_checksum(&digits)?;
        let birth_date = decode_date(&s[..5])?;
        Ok(Self {
            value: s.to_owned(),
            gender: decode_gender(digits[8]),
            birth_date,
        })
    }
}

impl TryFrom<String> for Rnokpp {
    type Error = RnokppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Rnokpp {
    type Error = RnokppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rnokpp> for String {
    fn from(value: Rnokpp) -> Self {
        value.value
    }
}

impl AsRef<str> for Rnokpp {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Rnokpp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for Rnokpp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Rnokpp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while parsing, decoding or generating an RNOKPP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RnokppError {
    /// The input contains a character that is not an ASCII digit.
    #[error("RNOKPP must consist of digits only")]
    NotDigits,

    /// The input has fewer than 10 digits.
    #[error("RNOKPP must have exactly 10 digits, got {len}")]
    TooShort { len: usize },

    /// The input has more than 10 digits.
    #[error("RNOKPP must have exactly 10 digits, got {len}")]
    TooLong { len: usize },

    /// The last digit does not match the checksum of the first nine.
    #[error("invalid control digit: expected {expected}, found {found}")]
    InvalidControlDigit { expected: u8, found: u8 },

    /// The 5-digit day number cannot be mapped to a supported date.
    #[error("invalid day number '{0}'")]
    InvalidDayNumber(String),

    /// The date precedes the epoch (01.01.1900).
    #[error("the allowed dates start from 01.01.1900, but {} is earlier", .0.format("%d.%m.%Y"))]
    DateBeforeEpoch(NaiveDate),

    /// The date lies after the generator's current date.
    #[error("only past or current dates are allowed, but {} is in the future", .0.format("%d.%m.%Y"))]
    DateInFuture(NaiveDate),

    /// The date cannot be encoded in five digits.
    #[error("{} is beyond the last encodable date", .0.format("%d.%m.%Y"))]
    DateOutOfRange(NaiveDate),

    /// The registration sequence does not fit into three digits.
    #[error("registration sequence {0} does not fit into three digits")]
    CounterOutOfRange(u16),
}

/// Broad category of an [`RnokppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not exactly ten digit characters.
    Format,
    /// Digits are well-formed but the checksum or encoded date is inconsistent.
    Domain,
    /// A requested value lies outside the representable range.
    Range,
}

impl RnokppError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotDigits | Self::TooShort { .. } | Self::TooLong { .. } => ErrorKind::Format,
            Self::InvalidControlDigit { .. } | Self::InvalidDayNumber(_) => ErrorKind::Domain,
            Self::DateBeforeEpoch(_)
            | Self::DateInFuture(_)
            | Self::DateOutOfRange(_)
            | Self::CounterOutOfRange(_) => ErrorKind::Range,
        }
    }
}

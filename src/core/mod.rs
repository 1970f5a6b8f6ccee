//! Validation and decoding of RNOKPP numbers.
//!
//! An RNOKPP has the layout `DDDDD SSSP C`: a 5-digit birth day number,
//! a 3-digit registration sequence, a parity digit for gender and a
//! control digit.

mod checksum;
mod counter;
mod date;
mod details;
mod error;
mod types;

pub use checksum::{CHECKSUM_WEIGHTS, RNOKPP_LEN, compute_checksum, is_valid, parse_digits};
#[cfg(feature = "generate")]
pub use counter::random_counter;
pub use counter::{
    FEMALE_DIGITS, MALE_DIGITS, MAX_SEQUENCE, decode_gender, encode_counter, parity_digits,
};
pub use date::{EPOCH, MAX_DAY_NUMBER, decode_date, encode_date, last_encodable_date};
pub use details::{get_details, get_gender, is_female, is_male, parse};
pub use error::{ErrorKind, RnokppError};
pub use types::{Gender, Rnokpp, RnokppDetails};

pub(crate) use checksum::append_checksum;

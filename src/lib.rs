//! # rnokpp
//!
//! Validation, decoding and generation of Ukrainian individual taxpayer
//! registration numbers (RNOKPP, formerly known as ІПН).
//!
//! An RNOKPP is ten digits: the birth day counted from 01.01.1900, a
//! registration counter whose last digit is odd for men and even for women,
//! and a control digit.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rnokpp::*;
//!
//! assert!(is_valid("3652504575"));
//! assert!(!is_valid("1234567890"));
//!
//! let details = get_details("3652504575");
//! assert!(details.is_valid);
//! assert_eq!(details.gender, Some(Gender::Male));
//! assert_eq!(details.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1));
//! assert_eq!(details.to_string(), "valid, male, 01.01.2000");
//!
//! assert_eq!(get_gender("3068208400").unwrap(), Gender::Female);
//!
//! let err = parse("3652504576").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Domain);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksum, date codec, gender, details |
//! | `generate` (default) | Random and deterministic generation (pulls in `rand`) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "generate")]
pub use crate::generate::{
    Generator, RandomRnokpps, generate_random_rnokpp, generate_random_rnokpp_n, generate_rnokpp,
};

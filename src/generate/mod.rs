//! Generation of valid RNOKPP numbers.
//!
//! Randomness is always injected. The free functions below use
//! [`rand::thread_rng`]; use [`Generator`] directly with a seeded RNG for
//! reproducible output.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rnokpp::generate::Generator;
//! use rnokpp::{Gender, get_details};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let generator = Generator::with_today(today).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let birthday = NaiveDate::from_ymd_opt(1990, 3, 8).unwrap();
//! let rnokpp = generator.generate(&mut rng, birthday, Gender::Female).unwrap();
//!
//! let details = get_details(&rnokpp);
//! assert!(details.is_valid);
//! assert_eq!(details.gender, Some(Gender::Female));
//! assert_eq!(details.birth_date, Some(birthday));
//! ```

mod batch;
mod generator;

pub use batch::RandomRnokpps;
pub use generator::Generator;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Gender, RnokppError};

/// Generate a valid number for `date` and `gender`.
///
/// Fails when `date` is before 01.01.1900 or after today.
pub fn generate_rnokpp(date: NaiveDate, gender: Gender) -> Result<String, RnokppError> {
    Generator::new().generate(&mut rand::thread_rng(), date, gender)
}

/// Generate a valid number with a random birth date and gender.
pub fn generate_random_rnokpp() -> String {
    Generator::new().generate_random(&mut rand::thread_rng())
}

/// Lazily generate `count` random valid numbers.
///
/// The batch owns an RNG seeded from the thread-local one, so a clone taken
/// before iteration yields the same numbers.
pub fn generate_random_rnokpp_n(count: usize) -> RandomRnokpps<StdRng> {
    let rng = StdRng::from_seed(rand::thread_rng().r#gen());
    RandomRnokpps::new(Generator::new(), rng, count)
}

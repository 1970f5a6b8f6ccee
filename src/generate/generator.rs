use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::{debug, trace};

use super::batch::RandomRnokpps;
use crate::core::{
    EPOCH, Gender, RnokppError, append_checksum, encode_counter, encode_date,
    last_encodable_date, random_counter,
};

/// Produces structurally valid RNOKPP numbers.
///
/// Birth dates are accepted from 01.01.1900 up to the generator's current
/// date (and never past the last date that fits into five digits).
/// Generated numbers are not looked up in any registry, so they are valid
/// but not necessarily assigned to anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    today: NaiveDate,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator bounded by today's local date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Generator bounded by a fixed "today".
    pub fn with_today(today: NaiveDate) -> Result<Self, RnokppError> {
        if today < EPOCH {
            return Err(RnokppError::DateBeforeEpoch(today));
        }
        Ok(Self { today })
    }

    /// The date treated as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Latest birth date this generator accepts.
    pub fn max_date(&self) -> NaiveDate {
        self.today.min(last_encodable_date())
    }

    /// Encode `date` after checking it against the allowed range.
    fn encode_birth_date(&self, date: NaiveDate) -> Result<String, RnokppError> {
        let result = if date > self.today {
            Err(RnokppError::DateInFuture(date))
        } else {
            encode_date(date)
        };
        if let Err(err) = &result {
            debug!(%date, %err, "rejected birth date");
        }
        result
    }

    /// Generate a number for `date` and `gender` with a random counter.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        date: NaiveDate,
        gender: Gender,
    ) -> Result<String, RnokppError> {
        let mut rnokpp = self.encode_birth_date(date)?;
        rnokpp.push_str(&random_counter(rng, gender));
        append_checksum(&mut rnokpp);
        trace!(%rnokpp, %date, %gender, "generated RNOKPP");
        Ok(rnokpp)
    }

    /// Generate the number for a given registration sequence (0..=999).
    ///
    /// Deterministic: the same arguments always give the same number.
    pub fn generate_sequential(
        &self,
        date: NaiveDate,
        sequence: u16,
        gender: Gender,
    ) -> Result<String, RnokppError> {
        let mut rnokpp = self.encode_birth_date(date)?;
        rnokpp.push_str(&encode_counter(sequence, gender)?);
        append_checksum(&mut rnokpp);
        trace!(%rnokpp, %date, sequence, %gender, "generated RNOKPP");
        Ok(rnokpp)
    }

    /// Generate a number with a uniformly drawn birth date and gender.
    pub fn generate_random<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // max_date() >= EPOCH, so the span is non-negative and the day
        // number stays within five digits
        let span = (self.max_date() - EPOCH).num_days();
        let day_number = rng.gen_range(0..=span) + 1;
        let gender = Gender::random(rng);

        let mut rnokpp = format!("{day_number:05}");
        rnokpp.push_str(&random_counter(rng, gender));
        append_checksum(&mut rnokpp);
        trace!(%rnokpp, %gender, "generated random RNOKPP");
        rnokpp
    }

    /// Lazily generate `count` random numbers.
    pub fn generate_random_n<'a, R: Rng + ?Sized>(
        &self,
        rng: &'a mut R,
        count: usize,
    ) -> RandomRnokpps<&'a mut R> {
        RandomRnokpps::new(*self, rng, count)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{get_details, get_gender, is_valid};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn generator() -> Generator {
        Generator::with_today(date(2024, 6, 15)).unwrap()
    }

    #[test]
    fn generated_number_decodes_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let rnokpp = generator()
            .generate(&mut rng, date(2000, 1, 1), Gender::Male)
            .unwrap();
        assert!(rnokpp.starts_with("36525"));
        assert!(is_valid(&rnokpp));
        assert_eq!(get_gender(&rnokpp).unwrap(), Gender::Male);
        assert_eq!(get_details(&rnokpp).birth_date, Some(date(2000, 1, 1)));
    }

    #[test]
    fn sequential_is_deterministic() {
        let g = generator();
        let a = g
            .generate_sequential(date(2000, 1, 1), 45, Gender::Male)
            .unwrap();
        let b = g
            .generate_sequential(date(2000, 1, 1), 45, Gender::Male)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "3652504517");
    }

    #[test]
    fn boundaries() {
        let g = generator();
        let mut rng = StdRng::seed_from_u64(2);
        assert!(g.generate(&mut rng, EPOCH, Gender::Female).is_ok());
        assert!(g.generate(&mut rng, g.today(), Gender::Male).is_ok());
        assert_eq!(
            g.generate(&mut rng, date(1899, 12, 31), Gender::Male),
            Err(RnokppError::DateBeforeEpoch(date(1899, 12, 31)))
        );
        assert_eq!(
            g.generate(&mut rng, date(2024, 6, 16), Gender::Male),
            Err(RnokppError::DateInFuture(date(2024, 6, 16)))
        );
    }

    #[test]
    fn far_future_today_still_bounded_by_encoding() {
        let g = Generator::with_today(date(2200, 1, 1)).unwrap();
        assert_eq!(g.max_date(), last_encodable_date());
        let past_last = last_encodable_date().succ_opt().unwrap();
        assert_eq!(
            g.generate_sequential(past_last, 0, Gender::Male),
            Err(RnokppError::DateOutOfRange(past_last))
        );
    }

    #[test]
    fn today_before_epoch_rejected() {
        assert!(Generator::with_today(date(1800, 1, 1)).is_err());
    }

    #[test]
    fn random_on_epoch_day() {
        let g = Generator::with_today(EPOCH).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let rnokpp = g.generate_random(&mut rng);
        assert!(rnokpp.starts_with("00001"));
        assert_eq!(get_details(&rnokpp).birth_date, Some(EPOCH));
    }
}

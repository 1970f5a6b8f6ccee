use std::iter::FusedIterator;

use rand::Rng;

use super::generator::Generator;

/// Lazy, finite sequence of random RNOKPP numbers.
///
/// Each item is drawn independently, so duplicates are possible. Cloning
/// an unstarted sequence replays the same numbers when `R` owns its state
/// (such as `StdRng`). A shared handle like `ThreadRng` does not replay.
#[derive(Debug, Clone)]
pub struct RandomRnokpps<R> {
    generator: Generator,
    rng: R,
    remaining: usize,
}

impl<R: Rng> RandomRnokpps<R> {
    pub(crate) fn new(generator: Generator, rng: R, count: usize) -> Self {
        Self {
            generator,
            rng,
            remaining: count,
        }
    }
}

impl<R: Rng> Iterator for RandomRnokpps<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.generate_random(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RandomRnokpps<R> {}

impl<R: Rng> FusedIterator for RandomRnokpps<R> {}

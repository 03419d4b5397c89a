//! Benchmark input generation and result verification

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fill a vector of `size` integers drawn uniformly from `[low, high]`.
///
/// # Panics
/// Panics if `low > high`.
pub fn generate<R: Rng + ?Sized>(size: usize, low: i32, high: i32, rng: &mut R) -> Vec<i32> {
    (0..size).map(|_| rng.random_range(low..=high)).collect()
}

/// Random array source with a fixed value range.
///
/// With a seed the sequence of arrays is reproducible; without one the
/// generator is seeded from the OS.
#[derive(Debug)]
pub struct ArrayGenerator {
    rng: StdRng,
    low: i32,
    high: i32,
}

impl ArrayGenerator {
    pub fn new(seed: Option<u64>, low: i32, high: i32) -> Result<Self> {
        if low > high {
            bail!("Invalid value range: low ({low}) is greater than high ({high})");
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self { rng, low, high })
    }

    pub fn generate(&mut self, size: usize) -> Vec<i32> {
        generate(size, self.low, self.high, &mut self.rng)
    }
}

/// True when every element is `<=` its successor
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Element-for-element equality
pub fn arrays_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

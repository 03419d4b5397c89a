//! Min/max reduction
//!
//! One pass over the array tracking the running minimum and maximum. The
//! parallel variants give every worker a private accumulator over its own
//! partition and merge the partials with `min`/`max`, which are associative
//! and commutative, so the merged result never depends on which worker
//! finished first.

use crate::parallel::ThreadTeam;
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

const EMPTY_ARRAY: &str = "min/max reduction requires a non-empty array";

/// Smallest and largest element of an array. Both are present in the array
/// and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T: Ord + Copy> MinMax<T> {
    /// Accumulator seeded with a single value
    pub fn of(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Fold one more value into the accumulator
    pub fn observe(self, value: T) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Merge two partial results
    pub fn combine(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Sequential min/max scan.
///
/// # Panics
/// Panics if `arr` is empty; the reduction has no identity to return.
pub fn min_max<T: Ord + Copy>(arr: &[T]) -> MinMax<T> {
    assert!(!arr.is_empty(), "{EMPTY_ARRAY}");

    let mut acc = MinMax::of(arr[0]);
    for &value in &arr[1..] {
        if value < acc.min {
            acc.min = value;
        }
        if value > acc.max {
            acc.max = value;
        }
    }
    acc
}

/// Min/max over a fresh thread team.
///
/// Every worker seeds its local accumulator with `arr[0]` so that workers with
/// an empty partition still contribute a valid partial.
///
/// # Panics
/// Panics if `arr` is empty.
///
/// # Errors
/// Fails if the team cannot be created.
pub fn par_min_max<T>(arr: &[T], team: &ThreadTeam) -> Result<MinMax<T>>
where
    T: Ord + Copy + Send + Sync,
{
    assert!(!arr.is_empty(), "{EMPTY_ARRAY}");

    let seed = MinMax::of(arr[0]);
    let partials = team.fork_join(0..arr.len(), |_, part| {
        arr[part].iter().fold(seed, |acc, &value| acc.observe(value))
    })?;

    Ok(partials.into_iter().fold(seed, MinMax::combine))
}

/// Min/max as a rayon fold/reduce inside a persistent pool.
///
/// # Panics
/// Panics if `arr` is empty.
pub fn pool_min_max<T>(arr: &[T], pool: &rayon::ThreadPool) -> MinMax<T>
where
    T: Ord + Copy + Send + Sync,
{
    assert!(!arr.is_empty(), "{EMPTY_ARRAY}");

    let seed = MinMax::of(arr[0]);
    pool.install(|| {
        arr.par_iter()
            .fold(|| seed, |acc, &value| acc.observe(value))
            .reduce(|| seed, MinMax::combine)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::build_pool;

    #[test]
    fn test_min_max_known_values() {
        let arr = [5, 3, 8, 1, 9, 2];
        assert_eq!(min_max(&arr), MinMax { min: 1, max: 9 });
    }

    #[test]
    fn test_min_max_single_element() {
        assert_eq!(min_max(&[7]), MinMax::of(7));
    }

    #[test]
    fn test_min_max_all_equal() {
        assert_eq!(min_max(&[4, 4, 4]), MinMax { min: 4, max: 4 });
    }

    #[test]
    fn test_min_max_negative_values() {
        let arr = [-3, -10, 0, 7, -1];
        assert_eq!(min_max(&arr), MinMax { min: -10, max: 7 });
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_min_max_empty_panics() {
        let empty: [i32; 0] = [];
        min_max(&empty);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_par_min_max_empty_panics() {
        let empty: [i32; 0] = [];
        let _ = par_min_max(&empty, &ThreadTeam::new(2));
    }

    #[test]
    fn test_par_min_max_matches_sequential() {
        let arr: Vec<i32> = (0..1000).map(|i| (i * 7919) % 1009 - 500).collect();
        let expected = min_max(&arr);
        for workers in [1, 2, 3, 4, 8, 16] {
            let got = par_min_max(&arr, &ThreadTeam::new(workers)).unwrap();
            assert_eq!(got, expected, "team of {workers}");
        }
    }

    #[test]
    fn test_par_min_max_more_workers_than_elements() {
        let arr = [42, 17];
        let got = par_min_max(&arr, &ThreadTeam::new(8)).unwrap();
        assert_eq!(got, MinMax { min: 17, max: 42 });
    }

    #[test]
    fn test_pool_min_max_matches_sequential() {
        let pool = build_pool(4).unwrap();
        let arr: Vec<i32> = (0..5000).map(|i| (i * 31) % 977).collect();
        assert_eq!(pool_min_max(&arr, &pool), min_max(&arr));
    }

    #[test]
    fn test_combine_is_order_independent() {
        let a = MinMax { min: 2, max: 9 };
        let b = MinMax { min: -1, max: 4 };
        assert_eq!(a.combine(b), b.combine(a));
        assert_eq!(a.combine(b), MinMax { min: -1, max: 9 });
    }
}

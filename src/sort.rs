//! Selection sort
//!
//! The outer loop over `i` is inherently sequential: iteration `i` needs the
//! swaps of every earlier iteration. Only the inner "find the minimum of
//! `[i, n)`" scan is parallelised.
//!
//! In the parallel variants each worker scans a disjoint part of `[i+1, n)`
//! with a local candidate seeded from `arr[i]`, then merges it into a shared
//! global candidate inside a critical section. The swap happens on the calling
//! thread after every worker has joined.
//!
//! Among equal minima the leftmost index always wins, so every variant moves
//! exactly the same elements and produces identical output.

use crate::parallel::{ThreadTeam, partition};
use anyhow::Result;
use std::cmp::Ordering;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

/// Sequential in-place selection sort
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
        }
    }
}

/// Selection sort with a new thread team for every outer iteration.
///
/// An `n`-element array opens `n - 1` parallel regions, and each one pays for
/// thread creation. For small arrays that cost dominates the scan itself.
///
/// # Errors
/// Fails if a team cannot be created; the array is then partially sorted.
pub fn par_selection_sort<T>(arr: &mut [T], team: &ThreadTeam) -> Result<()>
where
    T: Ord + Sync,
{
    let n = arr.len();
    if n < 2 {
        return Ok(());
    }

    for i in 0..n - 1 {
        let view: &[T] = arr;
        let global = Mutex::new((&view[i], i));

        team.fork_join(i + 1..n, |_, part| {
            merge_candidate(&global, local_minimum(view, i, part));
        })?;

        let (_, global_min_index) = global.into_inner().unwrap_or_else(PoisonError::into_inner);
        if global_min_index != i {
            arr.swap(i, global_min_index);
        }
    }

    Ok(())
}

/// Selection sort reusing one persistent rayon pool for every outer iteration.
///
/// Same scan and merge as [`par_selection_sort`]; only the thread lifecycle
/// differs.
pub fn pool_selection_sort<T>(arr: &mut [T], pool: &rayon::ThreadPool)
where
    T: Ord + Sync,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    let workers = pool.current_num_threads().max(1);
    for i in 0..n - 1 {
        let view: &[T] = arr;
        let global = Mutex::new((&view[i], i));

        pool.scope(|s| {
            for worker_id in 0..workers {
                let part = partition(i + 1..n, workers, worker_id);
                let global = &global;
                s.spawn(move |_| merge_candidate(global, local_minimum(view, i, part)));
            }
        });

        let (_, global_min_index) = global.into_inner().unwrap_or_else(PoisonError::into_inner);
        if global_min_index != i {
            arr.swap(i, global_min_index);
        }
    }
}

/// Scan `part` for its minimum, starting from the seed at index `seed`.
fn local_minimum<T: Ord>(arr: &[T], seed: usize, part: Range<usize>) -> (&T, usize) {
    let mut local = (&arr[seed], seed);
    for j in part {
        if arr[j] < *local.0 {
            local = (&arr[j], j);
        }
    }
    local
}

/// Critical section: replace the global candidate if `local` precedes it.
fn merge_candidate<'a, T: Ord>(global: &Mutex<(&'a T, usize)>, local: (&'a T, usize)) {
    let mut candidate = global.lock().unwrap_or_else(PoisonError::into_inner);
    if precedes(local, *candidate) {
        *candidate = local;
    }
}

/// Smaller value first; equal values resolve to the lower index.
fn precedes<T: Ord>(a: (&T, usize), b: (&T, usize)) -> bool {
    match a.0.cmp(b.0) {
        Ordering::Less => true,
        Ordering::Equal => a.1 < b.1,
        Ordering::Greater => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::build_pool;

    #[test]
    fn test_sequential_known_values() {
        let mut arr = [5, 3, 8, 1, 9, 2];
        selection_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_sequential_with_duplicates() {
        let mut arr = [3, 1, 2, 1, 3, 0];
        selection_sort(&mut arr);
        assert_eq!(arr, [0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: [i32; 0] = [];
        selection_sort(&mut empty);
        par_selection_sort(&mut empty, &ThreadTeam::new(4)).unwrap();

        let mut single = [99];
        selection_sort(&mut single);
        par_selection_sort(&mut single, &ThreadTeam::new(4)).unwrap();
        assert_eq!(single, [99]);
    }

    #[test]
    fn test_parallel_known_values() {
        for workers in [1, 2, 3, 4, 8] {
            let mut arr = [5, 3, 8, 1, 9, 2];
            par_selection_sort(&mut arr, &ThreadTeam::new(workers)).unwrap();
            assert_eq!(arr, [1, 2, 3, 5, 8, 9], "team of {workers}");
        }
    }

    #[test]
    fn test_parallel_reverse_sorted() {
        let mut arr: Vec<i32> = (0..50).rev().collect();
        par_selection_sort(&mut arr, &ThreadTeam::new(4)).unwrap();
        assert_eq!(arr, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_pool_matches_sequential() {
        let pool = build_pool(3).unwrap();
        let original: Vec<i32> = (0..200).map(|i| (i * 37) % 101).collect();

        let mut expected = original.clone();
        selection_sort(&mut expected);

        let mut pooled = original;
        pool_selection_sort(&mut pooled, &pool);
        assert_eq!(pooled, expected);
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let sorted: Vec<i32> = (0..30).collect();
        let mut arr = sorted.clone();
        par_selection_sort(&mut arr, &ThreadTeam::new(3)).unwrap();
        assert_eq!(arr, sorted);
    }

    #[test]
    fn test_precedes_breaks_ties_by_index() {
        assert!(precedes((&1, 5), (&2, 0)));
        assert!(precedes((&1, 2), (&1, 5)));
        assert!(!precedes((&1, 5), (&1, 2)));
        assert!(!precedes((&3, 0), (&1, 9)));
    }

    #[test]
    fn test_local_minimum_keeps_seed_for_empty_part() {
        let arr = [4, 1, 2];
        assert_eq!(local_minimum(&arr, 0, 3..3), (&4, 0));
        assert_eq!(local_minimum(&arr, 0, 1..3), (&1, 1));
    }

    #[test]
    fn test_merge_keeps_leftmost_equal_minimum() {
        let arr = [5, 1, 3, 1];
        let global = Mutex::new((&arr[0], 0));
        // Arrival order must not matter
        merge_candidate(&global, (&arr[3], 3));
        merge_candidate(&global, (&arr[1], 1));
        assert_eq!(global.into_inner().unwrap().1, 1);
    }
}

//! Fork-join execution primitives
//!
//! This module owns the thread-level machinery shared by the benchmarked
//! algorithms. It knows nothing about arrays, minima or sorting.
//!
//! # What This Module Does:
//! - **Thread teams**: [`ThreadTeam::fork_join`] creates a fresh set of scoped
//!   workers for one parallel region, hands each worker a disjoint slice of an
//!   index range and joins them all before returning
//! - **Static partitioning**: [`partition`] splits a range into contiguous,
//!   possibly empty, chunks (the `schedule(static)` layout)
//! - **Resource calculation**: [`ExecutionStrategy::calculate_optimal_workers`]
//!   turns the `parallel` config section into a worker count
//! - **Persistent pools**: [`build_pool`] creates a rayon pool for the
//!   comparison variants that reuse threads across regions
//!
//! # Region lifecycle
//!
//! ```text
//!   caller ──fork──▶ worker 0 ─┐
//!          ├───────▶ worker 1 ─┤
//!          └───────▶ worker k ─┴─join──▶ caller continues
//! ```
//!
//! No worker outlives the region that created it.
//!
//! # Example
//!
//! ```rust
//! use parbench::parallel::ThreadTeam;
//!
//! let data: Vec<u64> = (1..=100).collect();
//! let team = ThreadTeam::new(4);
//! let partials = team
//!     .fork_join(0..data.len(), |_worker_id, range| data[range].iter().sum::<u64>())
//!     .unwrap();
//! assert_eq!(partials.iter().sum::<u64>(), 5050);
//! ```

pub mod strategy;
pub mod team;

pub use strategy::{ExecutionStrategy, build_pool};
pub use team::{ThreadTeam, partition};

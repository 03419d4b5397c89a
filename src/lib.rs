//! # parbench - sequential vs thread-parallel micro-benchmarks
//!
//! Two small algorithms, each in a sequential and a thread-parallel version:
//!
//! - **Min/max reduction**: one scan tracking the running minimum and maximum;
//!   the parallel version gives each thread a partition and merges the
//!   per-thread results with `min`/`max`
//! - **Selection sort**: O(n²) in-place sort; the parallel version only
//!   parallelises the search for the minimum of the unsorted suffix, creating a
//!   thread team per outer iteration and merging local minima in a critical
//!   section
//!
//! Both parallel versions produce exactly the same output as their sequential
//! counterparts, including which of several equal minima gets moved.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run both benchmarks with the default sizes
//! parbench
//!
//! # Sort two array sizes with 4 threads, also timing a persistent pool
//! parbench sort --sizes 2000,20000 --threads 4 --pool
//!
//! # Machine-readable results
//! parbench --format json minmax --size 1000000
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use parbench::minmax::{min_max, par_min_max};
//! use parbench::parallel::ThreadTeam;
//! use parbench::sort::par_selection_sort;
//!
//! let team = ThreadTeam::new(4);
//!
//! let values = [5, 3, 8, 1, 9, 2];
//! let bounds = par_min_max(&values, &team)?;
//! assert_eq!(bounds, min_max(&values));
//! assert_eq!((bounds.min, bounds.max), (1, 9));
//!
//! let mut arr = values;
//! par_selection_sort(&mut arr, &team)?;
//! assert_eq!(arr, [1, 2, 3, 5, 8, 9]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bench;
pub mod cli;
pub mod config;
pub mod data;
pub mod minmax;
pub mod parallel;
pub mod report;
pub mod sort;
pub mod timing;

pub use cli::{Cli, Output};
pub use config::BenchConfig;

/// Result type alias for parbench operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

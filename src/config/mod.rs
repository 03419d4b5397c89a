//! Configuration management for parbench
//!
//! Configuration is layered with figment, lowest priority first:
//!
//! 1. Embedded `default-config.toml`
//! 2. `parbench.toml` in the working directory, or the file passed with `--config`
//! 3. `PARBENCH_` environment variables (`__` separates section and key)
//! 4. Command-line flags
//!
//! The merged result is validated before any benchmark runs.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::parallel::ExecutionStrategy;

mod loader;

pub use loader::{CONFIG_FILE_NAME, ConfigOverrides, DEFAULT_CONFIG, ENV_PREFIX};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    /// Generated input data
    pub data: DataConfig,

    /// Min/max reduction benchmark
    pub minmax: MinMaxConfig,

    /// Selection sort benchmark
    pub sort: SortConfig,

    /// Thread team sizing
    pub parallel: ParallelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Smallest generated value (inclusive)
    pub low: i32,

    /// Largest generated value (inclusive)
    pub high: i32,

    /// RNG seed; `None` seeds from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            low: 1,
            high: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxConfig {
    /// Array length
    pub size: usize,
}

impl Default for MinMaxConfig {
    fn default() -> Self {
        Self { size: 10_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// One benchmark run per array length
    pub sizes: Vec<usize>,

    /// Also time the persistent-pool variant
    #[serde(default)]
    pub compare_pool: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000],
            compare_pool: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Fixed number of worker threads (0 = auto-detect)
    pub max_threads: usize,

    /// Percentage of CPU cores to use when auto-detecting (1-100)
    pub thread_percentage: u8,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            thread_percentage: 100,
        }
    }
}

impl BenchConfig {
    /// Reject configurations no benchmark can run with
    pub fn validate(&self) -> Result<()> {
        if self.data.low > self.data.high {
            bail!(
                "data.low ({}) must not be greater than data.high ({})",
                self.data.low,
                self.data.high
            );
        }
        if self.minmax.size == 0 {
            bail!("minmax.size must be at least 1");
        }
        if self.sort.sizes.is_empty() {
            bail!("sort.sizes must list at least one array size");
        }
        if self.sort.sizes.contains(&0) {
            bail!("sort.sizes must not contain 0");
        }
        if !(1..=100).contains(&self.parallel.thread_percentage) {
            bail!(
                "parallel.thread_percentage must be between 1 and 100, got {}",
                self.parallel.thread_percentage
            );
        }
        Ok(())
    }

    /// Worker count for every parallel variant
    pub fn workers(&self) -> usize {
        ExecutionStrategy::calculate_optimal_workers(
            self.parallel.max_threads,
            self.parallel.thread_percentage,
        )
    }
}

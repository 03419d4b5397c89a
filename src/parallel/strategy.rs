use anyhow::{Context, Result};
use serde::Serialize;

/// How a benchmarked algorithm distributes its work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExecutionStrategy {
    /// Plain loop on the calling thread
    Sequential,
    /// A new [`ThreadTeam`](super::ThreadTeam) per parallel region
    Team { workers: usize },
    /// A persistent rayon pool reused by every region
    Pool { workers: usize },
}

impl ExecutionStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStrategy::Sequential => "sequential",
            ExecutionStrategy::Team { .. } => "thread team",
            ExecutionStrategy::Pool { .. } => "persistent pool",
        }
    }

    pub fn workers(&self) -> usize {
        match self {
            ExecutionStrategy::Sequential => 1,
            ExecutionStrategy::Team { workers } | ExecutionStrategy::Pool { workers } => *workers,
        }
    }

    /// Calculate the worker count from system resources and configuration
    ///
    /// # Parameters
    /// - `max_threads_config`: fixed team size (0 = derive from CPU count)
    /// - `thread_percentage`: percentage of logical CPUs used when no fixed size is set
    ///
    /// # Algorithm
    /// ```text
    /// if max_threads_config > 0 { max_threads_config }
    /// else { max(1, num_cpus::get() * thread_percentage / 100) }
    /// ```
    ///
    /// A fixed size is honoured even above the CPU count, the same way
    /// `OMP_NUM_THREADS` allows oversubscription.
    ///
    /// # Examples
    /// ```rust
    /// use parbench::parallel::ExecutionStrategy;
    ///
    /// assert_eq!(ExecutionStrategy::calculate_optimal_workers(8, 75), 8);
    /// assert!(ExecutionStrategy::calculate_optimal_workers(0, 1) >= 1);
    /// ```
    pub fn calculate_optimal_workers(max_threads_config: usize, thread_percentage: u8) -> usize {
        if max_threads_config > 0 {
            return max_threads_config;
        }

        let available_cores = num_cpus::get();
        std::cmp::max(1, (available_cores * thread_percentage as usize) / 100)
    }
}

/// Build a persistent rayon pool with exactly `workers` threads
pub fn build_pool(workers: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|index| format!("pool-worker-{index}"))
        .build()
        .with_context(|| format!("Failed to build thread pool with {workers} workers"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_thread_count_is_exact() {
        assert_eq!(ExecutionStrategy::calculate_optimal_workers(3, 100), 3);
        assert_eq!(ExecutionStrategy::calculate_optimal_workers(512, 10), 512);
    }

    #[test]
    fn test_percentage_never_below_one() {
        let workers = ExecutionStrategy::calculate_optimal_workers(0, 1);
        assert!(workers >= 1);
        assert!(workers <= num_cpus::get());
    }

    #[test]
    fn test_full_percentage_uses_all_cpus() {
        assert_eq!(
            ExecutionStrategy::calculate_optimal_workers(0, 100),
            num_cpus::get()
        );
    }

    #[test]
    fn test_strategy_workers_and_labels() {
        assert_eq!(ExecutionStrategy::Sequential.workers(), 1);
        assert_eq!(ExecutionStrategy::Team { workers: 6 }.workers(), 6);
        assert_eq!(ExecutionStrategy::Pool { workers: 2 }.label(), "persistent pool");
    }

    #[test]
    fn test_build_pool_has_requested_threads() {
        let pool = build_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }
}

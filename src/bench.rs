//! Benchmark driver
//!
//! Generates input arrays, times every variant on identical copies of the
//! same input, checks the results against each other and packs everything
//! into serialisable reports. Rendering lives in [`crate::report`].

use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::data::{ArrayGenerator, arrays_equal, is_sorted};
use crate::minmax::{self, MinMax};
use crate::parallel::{ExecutionStrategy, ThreadTeam, build_pool};
use crate::sort;
use crate::timing::{as_millis_f64, measure, speedup};

/// Coarse classification of a speedup ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// More than 1.2x faster
    SignificantSpeedup,
    /// Between 0.8x and 1.2x; thread overhead eats most of the gain
    Marginal,
    /// 0.8x or worse
    Slowdown,
}

impl Verdict {
    pub fn from_speedup(speedup: f64) -> Self {
        if speedup > 1.2 {
            Verdict::SignificantSpeedup
        } else if speedup > 0.8 {
            Verdict::Marginal
        } else {
            Verdict::Slowdown
        }
    }
}

/// One timed min/max variant
#[derive(Debug, Clone, Serialize)]
pub struct MinMaxRun {
    pub strategy: ExecutionStrategy,
    pub result: MinMax<i32>,
    pub millis: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MinMaxReport {
    pub size: usize,
    pub workers: usize,
    pub sequential: MinMaxRun,
    pub parallel: MinMaxRun,
    pub results_match: bool,
    pub speedup: f64,
    pub verdict: Verdict,
}

/// One timed sort variant
#[derive(Debug, Clone, Serialize)]
pub struct SortRun {
    pub strategy: ExecutionStrategy,
    pub millis: f64,
    pub sorted: bool,
}

/// Persistent-pool run compared against the sequential baseline
#[derive(Debug, Clone, Serialize)]
pub struct PoolComparison {
    pub run: SortRun,
    pub matches_sequential: bool,
    pub speedup: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub size: usize,
    pub workers: usize,
    pub sequential: SortRun,
    pub parallel: SortRun,
    pub results_match: bool,
    pub speedup: f64,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolComparison>,
}

/// Everything one invocation measured
#[derive(Debug, Clone, Serialize)]
pub struct BenchSummary {
    pub cpus: usize,
    pub workers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minmax: Option<MinMaxReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortReport>,
}

/// Thread resources for one strategy, created before the clock starts
enum Engine {
    Sequential,
    Team(ThreadTeam),
    Pool(rayon::ThreadPool),
}

impl Engine {
    fn new(strategy: ExecutionStrategy) -> Result<Self> {
        Ok(match strategy {
            ExecutionStrategy::Sequential => Engine::Sequential,
            ExecutionStrategy::Team { workers } => Engine::Team(ThreadTeam::new(workers)),
            ExecutionStrategy::Pool { workers } => Engine::Pool(build_pool(workers)?),
        })
    }

    fn min_max(&self, arr: &[i32]) -> Result<MinMax<i32>> {
        match self {
            Engine::Sequential => Ok(minmax::min_max(arr)),
            Engine::Team(team) => minmax::par_min_max(arr, team),
            Engine::Pool(pool) => Ok(minmax::pool_min_max(arr, pool)),
        }
    }

    fn sort(&self, arr: &mut [i32]) -> Result<()> {
        match self {
            Engine::Sequential => sort::selection_sort(arr),
            Engine::Team(team) => sort::par_selection_sort(arr, team)?,
            Engine::Pool(pool) => sort::pool_selection_sort(arr, pool),
        }
        Ok(())
    }
}

/// Runs the configured benchmarks
#[derive(Debug)]
pub struct BenchRunner {
    config: BenchConfig,
    generator: ArrayGenerator,
    workers: usize,
}

impl BenchRunner {
    pub fn new(config: BenchConfig) -> Result<Self> {
        let generator = ArrayGenerator::new(config.data.seed, config.data.low, config.data.high)?;
        let workers = config.workers();
        debug!("Benchmark runner using {} workers", workers);

        Ok(Self {
            config,
            generator,
            workers,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Min/max over one array of `minmax.size` elements
    pub fn run_min_max(&mut self) -> Result<MinMaxReport> {
        let size = self.config.minmax.size;
        let arr = self.generator.generate(size);
        info!("Generated {} values for min/max", size);

        let sequential = self.time_min_max(ExecutionStrategy::Sequential, &arr)?;
        let parallel = self.time_min_max(
            ExecutionStrategy::Team {
                workers: self.workers,
            },
            &arr,
        )?;

        let ratio = speedup(sequential.1, parallel.1);
        Ok(MinMaxReport {
            size,
            workers: self.workers,
            results_match: sequential.0.result == parallel.0.result,
            speedup: ratio,
            verdict: Verdict::from_speedup(ratio),
            sequential: sequential.0,
            parallel: parallel.0,
        })
    }

    /// One sort report per entry of `sort.sizes`
    pub fn run_sorts(&mut self) -> Result<Vec<SortReport>> {
        let sizes = self.config.sort.sizes.clone();
        sizes.into_iter().map(|size| self.run_sort(size)).collect()
    }

    /// Sort identical copies of one random array with every variant
    pub fn run_sort(&mut self, size: usize) -> Result<SortReport> {
        let original = self.generator.generate(size);
        info!("Generated {} values for selection sort", size);

        let mut sequential_arr = original.clone();
        let (sequential, sequential_time) =
            self.time_sort(ExecutionStrategy::Sequential, &mut sequential_arr)?;

        let mut parallel_arr = original.clone();
        let (parallel, parallel_time) = self.time_sort(
            ExecutionStrategy::Team {
                workers: self.workers,
            },
            &mut parallel_arr,
        )?;

        let pool = if self.config.sort.compare_pool {
            let mut pool_arr = original;
            let (run, pool_time) = self.time_sort(
                ExecutionStrategy::Pool {
                    workers: self.workers,
                },
                &mut pool_arr,
            )?;
            Some(PoolComparison {
                run,
                matches_sequential: arrays_equal(&sequential_arr, &pool_arr),
                speedup: speedup(sequential_time, pool_time),
            })
        } else {
            None
        };

        let ratio = speedup(sequential_time, parallel_time);
        Ok(SortReport {
            size,
            workers: self.workers,
            sequential,
            parallel,
            results_match: arrays_equal(&sequential_arr, &parallel_arr),
            speedup: ratio,
            verdict: Verdict::from_speedup(ratio),
            pool,
        })
    }

    fn time_min_max(
        &self,
        strategy: ExecutionStrategy,
        arr: &[i32],
    ) -> Result<(MinMaxRun, Duration)> {
        let engine = Engine::new(strategy)?;
        let (result, elapsed) = measure(|| engine.min_max(arr));
        let result = result?;
        debug!("min/max {}: {:?} in {:?}", strategy.label(), result, elapsed);

        Ok((
            MinMaxRun {
                strategy,
                result,
                millis: as_millis_f64(elapsed),
            },
            elapsed,
        ))
    }

    fn time_sort(
        &self,
        strategy: ExecutionStrategy,
        arr: &mut [i32],
    ) -> Result<(SortRun, Duration)> {
        let engine = Engine::new(strategy)?;
        let (result, elapsed) = measure(|| engine.sort(arr));
        result?;
        debug!("sort {} of {} values in {:?}", strategy.label(), arr.len(), elapsed);

        Ok((
            SortRun {
                strategy,
                millis: as_millis_f64(elapsed),
                sorted: is_sorted(arr),
            },
            elapsed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(compare_pool: bool) -> BenchConfig {
        let mut config = BenchConfig::default();
        config.data.seed = Some(2024);
        config.minmax.size = 500;
        config.sort.sizes = vec![40, 65];
        config.sort.compare_pool = compare_pool;
        config.parallel.max_threads = 3;
        config
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_speedup(2.0), Verdict::SignificantSpeedup);
        assert_eq!(Verdict::from_speedup(1.2), Verdict::Marginal);
        assert_eq!(Verdict::from_speedup(0.81), Verdict::Marginal);
        assert_eq!(Verdict::from_speedup(0.8), Verdict::Slowdown);
    }

    #[test]
    fn test_min_max_report() {
        let mut runner = BenchRunner::new(small_config(false)).unwrap();
        let report = runner.run_min_max().unwrap();

        assert_eq!(report.size, 500);
        assert_eq!(report.workers, 3);
        assert!(report.results_match);
        assert_eq!(report.sequential.result, report.parallel.result);
        assert!(report.sequential.result.min >= 1);
        assert!(report.sequential.result.max <= 10_000);
        assert_eq!(report.parallel.strategy, ExecutionStrategy::Team { workers: 3 });
    }

    #[test]
    fn test_sort_reports_without_pool() {
        let mut runner = BenchRunner::new(small_config(false)).unwrap();
        let reports = runner.run_sorts().unwrap();

        assert_eq!(reports.iter().map(|r| r.size).collect::<Vec<_>>(), vec![40, 65]);
        for report in &reports {
            assert!(report.sequential.sorted);
            assert!(report.parallel.sorted);
            assert!(report.results_match);
            assert!(report.pool.is_none());
        }
    }

    #[test]
    fn test_sort_report_with_pool() {
        let mut runner = BenchRunner::new(small_config(true)).unwrap();
        let report = runner.run_sort(30).unwrap();

        let pool = report.pool.expect("pool comparison requested");
        assert!(pool.run.sorted);
        assert!(pool.matches_sequential);
        assert_eq!(pool.run.strategy, ExecutionStrategy::Pool { workers: 3 });
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut runner = BenchRunner::new(small_config(false)).unwrap();
        let summary = BenchSummary {
            cpus: num_cpus::get(),
            workers: runner.workers(),
            minmax: Some(runner.run_min_max().unwrap()),
            sort: Vec::new(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["minmax"]["results_match"], true);
        assert_eq!(json["minmax"]["parallel"]["strategy"]["kind"], "team");
        assert!(json.get("sort").is_none());
    }
}

use anyhow::{Context, Result, anyhow};
use std::ops::Range;

/// A fork-join thread team of fixed size.
///
/// The value only describes the team; every call to [`ThreadTeam::fork_join`]
/// spawns a new set of scoped threads and joins them before returning, so no
/// thread identity survives from one region to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadTeam {
    workers: usize,
}

impl ThreadTeam {
    /// Create a team descriptor. A size of zero is treated as one worker.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `body` once per worker over a disjoint partition of `range`.
    ///
    /// Worker `k` receives `partition(range, workers, k)`; partitions may be
    /// empty when the range is shorter than the team. Results are returned in
    /// worker order. A single-worker team runs inline on the calling thread.
    ///
    /// # Errors
    /// Fails if a worker thread cannot be spawned or if any worker panics.
    pub fn fork_join<R, F>(&self, range: Range<usize>, body: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(usize, Range<usize>) -> R + Sync,
    {
        if self.workers == 1 {
            return Ok(vec![body(0, range)]);
        }

        tracing::trace!("forking team of {} workers over {:?}", self.workers, range);

        let body = &body;
        crossbeam::thread::scope(|s| -> Result<Vec<R>> {
            let mut handles = Vec::with_capacity(self.workers);
            for worker_id in 0..self.workers {
                let part = partition(range.clone(), self.workers, worker_id);
                let handle = s
                    .builder()
                    .name(format!("team-worker-{worker_id}"))
                    .spawn(move |_| body(worker_id, part))
                    .with_context(|| format!("Failed to spawn team worker {worker_id}"))?;
                handles.push(handle);
            }

            // Join barrier: collect every worker before the region ends
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| anyhow!("Team worker panicked during parallel region"))
                })
                .collect()
        })
        .map_err(|_| anyhow!("Thread panic occurred during parallel region"))?
    }
}

/// Contiguous static partition of `range` for `worker_id` out of `workers`.
///
/// Worker `k` gets `[start + k*len/workers, start + (k+1)*len/workers)`. The
/// partitions are disjoint, cover the range in order, differ in length by at
/// most one, and are empty when there are more workers than indices.
pub fn partition(range: Range<usize>, workers: usize, worker_id: usize) -> Range<usize> {
    let workers = workers.max(1);
    let len = range.end.saturating_sub(range.start);
    let lo = range.start + len * worker_id / workers;
    let hi = range.start + len * (worker_id + 1) / workers;
    lo..hi.min(range.end)
}

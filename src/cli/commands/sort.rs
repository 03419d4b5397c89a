use anyhow::Result;
use clap::Args;

use crate::bench::{BenchRunner, BenchSummary};
use crate::cli::Output;
use crate::config::{BenchConfig, ConfigOverrides};
use crate::report::{self, ReportFormat};

#[derive(Args, Debug, Default)]
pub struct SortArgs {
    /// Array lengths to sort, comma-separated (overrides sort.sizes)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Also time a selection sort that reuses one persistent thread pool
    #[arg(long)]
    pub pool: bool,
}

impl SortArgs {
    pub fn apply(&self, overrides: &mut ConfigOverrides) {
        if !self.sizes.is_empty() {
            overrides.sort_sizes = Some(self.sizes.clone());
        }
        if self.pool {
            overrides.compare_pool = Some(true);
        }
    }
}

pub fn execute(config: BenchConfig, format: ReportFormat, output: &Output) -> Result<()> {
    let mut runner = BenchRunner::new(config)?;

    match format {
        ReportFormat::Json => {
            let sort = runner.run_sorts()?;
            report::print_json(&BenchSummary {
                cpus: num_cpus::get(),
                workers: runner.workers(),
                minmax: None,
                sort,
            })
        }
        ReportFormat::Text => {
            let reports = run_and_render(&mut runner, output)?;
            report::render_sort_conclusions(output, &reports);
            Ok(())
        }
    }
}

/// Render each size as soon as it finishes; large sorts take a while
pub(crate) fn run_and_render(
    runner: &mut BenchRunner,
    output: &Output,
) -> Result<Vec<crate::bench::SortReport>> {
    let sizes = runner.config().sort.sizes.clone();
    let mut reports = Vec::with_capacity(sizes.len());

    for size in sizes {
        output.verbose(&format!("Sorting {size} elements..."));
        let report = runner.run_sort(size)?;
        report::render_sort(output, &report);
        reports.push(report);
    }

    Ok(reports)
}

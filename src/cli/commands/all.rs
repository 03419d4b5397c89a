use anyhow::Result;
use clap::Args;

use crate::bench::{BenchRunner, BenchSummary};
use crate::cli::Output;
use crate::config::BenchConfig;
use crate::report::{self, ReportFormat};

#[derive(Args, Debug, Default)]
pub struct AllArgs {}

pub fn execute(config: BenchConfig, format: ReportFormat, output: &Output) -> Result<()> {
    let mut runner = BenchRunner::new(config)?;

    match format {
        ReportFormat::Json => {
            let minmax = runner.run_min_max()?;
            let sort = runner.run_sorts()?;
            report::print_json(&BenchSummary {
                cpus: num_cpus::get(),
                workers: runner.workers(),
                minmax: Some(minmax),
                sort,
            })
        }
        ReportFormat::Text => {
            let minmax = runner.run_min_max()?;
            report::render_min_max(output, &minmax);

            let reports = super::sort::run_and_render(&mut runner, output)?;
            report::render_sort_conclusions(output, &reports);
            Ok(())
        }
    }
}

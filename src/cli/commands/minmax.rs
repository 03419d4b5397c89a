use anyhow::Result;
use clap::Args;

use crate::bench::{BenchRunner, BenchSummary};
use crate::cli::Output;
use crate::config::{BenchConfig, ConfigOverrides};
use crate::report::{self, ReportFormat};

#[derive(Args, Debug, Default)]
pub struct MinMaxArgs {
    /// Array length (overrides minmax.size)
    #[arg(long)]
    pub size: Option<usize>,
}

impl MinMaxArgs {
    pub fn apply(&self, overrides: &mut ConfigOverrides) {
        if self.size.is_some() {
            overrides.minmax_size = self.size;
        }
    }
}

pub fn execute(config: BenchConfig, format: ReportFormat, output: &Output) -> Result<()> {
    let mut runner = BenchRunner::new(config)?;
    let report = runner.run_min_max()?;

    match format {
        ReportFormat::Json => report::print_json(&BenchSummary {
            cpus: num_cpus::get(),
            workers: runner.workers(),
            minmax: Some(report),
            sort: Vec::new(),
        }),
        ReportFormat::Text => {
            report::render_min_max(output, &report);
            Ok(())
        }
    }
}

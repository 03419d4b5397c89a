use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::Output;
use crate::config::BenchConfig;
use crate::report::{self, ReportFormat};

#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Info<'a> {
    version: &'static str,
    cpus: usize,
    physical_cpus: usize,
    workers: usize,
    config: &'a BenchConfig,
}

pub fn execute(config: &BenchConfig, format: ReportFormat, output: &Output) -> Result<()> {
    let info = Info {
        version: crate::VERSION,
        cpus: num_cpus::get(),
        physical_cpus: num_cpus::get_physical(),
        workers: config.workers(),
        config,
    };

    if format == ReportFormat::Json {
        return report::print_json(&info);
    }

    output.header(&format!("parbench v{}", info.version));

    output.section_header("System");
    output.key_value("Logical CPUs:", &info.cpus.to_string(), false);
    output.key_value("Physical CPUs:", &info.physical_cpus.to_string(), false);
    output.key_value("Team size:", &info.workers.to_string(), true);

    output.section_header("Data");
    output.key_value(
        "Value range:",
        &format!("[{}, {}]", config.data.low, config.data.high),
        false,
    );
    output.key_value(
        "Seed:",
        &config
            .data
            .seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
        false,
    );

    output.section_header("Benchmarks");
    output.key_value("Min/max size:", &config.minmax.size.to_string(), false);
    let sizes: Vec<String> = config.sort.sizes.iter().map(ToString::to_string).collect();
    output.key_value("Sort sizes:", &sizes.join(", "), false);
    output.key_value("Pool comparison:", &config.sort.compare_pool.to_string(), false);

    if config.parallel.max_threads == 0 && info.workers < info.cpus {
        output.warning(&format!(
            "Using {}% of {} CPUs",
            config.parallel.thread_percentage, info.cpus
        ));
    }

    Ok(())
}

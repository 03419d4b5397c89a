//! Rendering of benchmark reports
//!
//! Text output mirrors the flow of a run: sequential timing, parallel timing,
//! comparison, then the fixed conclusions. JSON output prints the report
//! structures as-is.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::bench::{MinMaxReport, SortReport};
use crate::cli::Output;

pub mod conclusions;

pub use conclusions::{Conclusion, min_max_conclusions, sort_conclusions};

/// Output format for benchmark results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}

pub fn render_min_max(output: &Output, report: &MinMaxReport) {
    output.header("Min/max reduction: sequential vs parallel");
    output.step(&format!("Array of {} random numbers", report.size));

    output.section_header("Sequential");
    output.key_value("Minimum:", &report.sequential.result.min.to_string(), false);
    output.key_value("Maximum:", &report.sequential.result.max.to_string(), false);
    output.key_value("Time:", &format!("{:.6} ms", report.sequential.millis), false);

    output.section_header("Parallel (thread team)");
    output.key_value("Threads:", &report.workers.to_string(), false);
    output.key_value("Minimum:", &report.parallel.result.min.to_string(), false);
    output.key_value("Maximum:", &report.parallel.result.max.to_string(), false);
    output.key_value("Time:", &format!("{:.6} ms", report.parallel.millis), false);

    output.section_header("Comparison");
    output.check(
        if report.results_match {
            "Results match: the parallel reduction is correct"
        } else {
            "Results differ between sequential and parallel runs"
        },
        report.results_match,
    );
    output.key_value(
        "Speedup:",
        &format!("{:.2}x", report.speedup),
        report.speedup > 1.0,
    );
    output.info(conclusions::faster_variant(report.speedup));

    output.section_header("Conclusions");
    render_conclusions(output, &min_max_conclusions(report));
}

pub fn render_sort(output: &Output, report: &SortReport) {
    output.separator();
    output.header(&format!("Selection sort of {} elements", report.size));

    output.section_header("Sequential selection sort");
    output.key_value("Time:", &format!("{:.4} ms", report.sequential.millis), false);
    render_sorted(output, report.sequential.sorted);

    output.section_header("Parallel selection sort (thread team per iteration)");
    output.key_value("Threads:", &report.workers.to_string(), false);
    output.key_value("Time:", &format!("{:.4} ms", report.parallel.millis), false);
    render_sorted(output, report.parallel.sorted);

    if let Some(pool) = &report.pool {
        output.section_header("Parallel selection sort (persistent pool)");
        output.key_value("Threads:", &report.workers.to_string(), false);
        output.key_value("Time:", &format!("{:.4} ms", pool.run.millis), false);
        render_sorted(output, pool.run.sorted);
        output.check("Pool result matches sequential", pool.matches_sequential);
        output.key_value("Speedup:", &format!("{:.2}x", pool.speedup), pool.speedup > 1.0);
    }

    output.section_header("Results");
    output.check(
        if report.results_match {
            "Sequential and parallel outputs are identical"
        } else {
            "Sequential and parallel outputs differ"
        },
        report.results_match,
    );
    output.key_value(
        "Speedup:",
        &format!("{:.2}x", report.speedup),
        report.speedup > 1.0,
    );
    output.info(&conclusions::relative_difference(report.speedup));
}

pub fn render_sort_conclusions(output: &Output, reports: &[SortReport]) {
    output.separator();
    output.header("Overall conclusions");
    render_conclusions(output, &sort_conclusions(reports));
}

fn render_sorted(output: &Output, sorted: bool) {
    output.check(if sorted { "Sorted correctly" } else { "Array is not sorted" }, sorted);
}

fn render_conclusions(output: &Output, conclusions: &[Conclusion]) {
    for (index, conclusion) in conclusions.iter().enumerate() {
        output.step(&format!("{}. {}", index + 1, conclusion.title));
        for point in &conclusion.points {
            output.list_item(point);
        }
    }
}

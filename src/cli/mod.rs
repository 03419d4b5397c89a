//! Command-line interface for parbench
//!
//! Parses arguments with clap, sets up logging, merges the command-line
//! overrides into the configuration and dispatches to the command modules.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{BenchConfig, ConfigOverrides};
use crate::report::ReportFormat;

pub mod commands;
mod output;

pub use output::Output;

use commands::{all, info, minmax, sort};

/// parbench - sequential vs thread-parallel reduction and selection sort
#[derive(Parser)]
#[command(
    name = "parbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compare sequential and thread-parallel min/max reduction and selection sort",
    long_about = "parbench generates random integer arrays, runs a sequential and a \
                  thread-parallel version of each algorithm on identical copies, checks \
                  that the results agree and reports the timings and speedup."
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use custom configuration file (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE", global = true, env = "PARBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text, global = true)]
    pub format: ReportFormat,

    /// Number of worker threads per parallel region (default: all CPUs)
    #[arg(short = 't', long, global = true)]
    pub threads: Option<usize>,

    /// Seed for the random array generator
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Smallest generated value
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub low: Option<i32>,

    /// Largest generated value
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub high: Option<i32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the min/max and selection sort benchmarks (default)
    All(all::AllArgs),
    /// Sequential vs parallel min/max reduction
    Minmax(minmax::MinMaxArgs),
    /// Sequential vs parallel selection sort
    Sort(sort::SortArgs),
    /// Show detected CPUs and the effective configuration
    Info(info::InfoArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::All(all::AllArgs::default())
    }
}

impl Cli {
    pub fn run(mut self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let command = self.command.take().unwrap_or_default();

        let mut overrides = self.overrides();
        match &command {
            Commands::Minmax(args) => args.apply(&mut overrides),
            Commands::Sort(args) => args.apply(&mut overrides),
            Commands::All(_) | Commands::Info(_) => {}
        }

        let config = BenchConfig::load(self.config.as_deref(), &overrides)?;

        match command {
            Commands::All(_) => all::execute(config, self.format, &output),
            Commands::Minmax(_) => minmax::execute(config, self.format, &output),
            Commands::Sort(_) => sort::execute(config, self.format, &output),
            Commands::Info(_) => info::execute(&config, self.format, &output),
        }
    }

    /// Global flags that map onto configuration keys
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            threads: self.threads,
            seed: self.seed,
            low: self.low,
            high: self.high,
            ..Default::default()
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs go to stderr so that `--format json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_all() {
        let cli = Cli::try_parse_from(["parbench"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Commands::default(), Commands::All(_)));
    }

    #[test]
    fn test_global_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "parbench", "sort", "--threads", "4", "--seed", "7", "--low", "-5", "--high", "5",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.threads, Some(4));
        assert_eq!(overrides.seed, Some(7));
        assert_eq!(overrides.low, Some(-5));
        assert_eq!(overrides.high, Some(5));
        assert_eq!(cli.format, ReportFormat::Text);
    }

    #[test]
    fn test_json_format_flag() {
        let cli = Cli::try_parse_from(["parbench", "--format", "json", "minmax"]).unwrap();
        assert_eq!(cli.format, ReportFormat::Json);
        assert!(matches!(cli.command, Some(Commands::Minmax(_))));
    }
}

//! # fmu-check entry point
//!
//! Parses the optional flags, initializes tracing, and performs one metric
//! run. Exit status 0 means `result.json` was written, whatever the verdict;
//! 1 means the run broke down before a verdict could be written.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fmuc_cli::args::MetricArgs;
use fmuc_cli::run_metric;

/// FMU modelDescription.xml quality check for OCEAN.
///
/// Validates the first FMU found under the input directory with FMPy and
/// writes `{"result": <bool>, "log": "<text>"}` to the output directory.
#[derive(Parser, Debug)]
#[command(name = "fmu-check", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    metric: MetricArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("fmu-check v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli.metric) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &MetricArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let validator = args.build_validator(&config);
    let report = run_metric(&config, validator.as_ref())?;

    if args.print {
        println!("{}", report.record.to_json()?);
    }
    Ok(())
}

//! # Run Arguments
//!
//! Optional overrides on top of the fixed container layout. None of them is
//! needed in OCEAN; they exist for local runs and CI.
//!
//! Precedence: built-in defaults, then `--config` file, then flags.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use fmuc_core::MetricConfig;
use fmuc_validate::{FmpyValidator, MockValidator, ModelDescriptionValidator};

/// Arguments for a metric run.
#[derive(Args, Debug, Default)]
pub struct MetricArgs {
    /// YAML file overriding the default locations.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory searched recursively for `*.fmu` [default: ./data/inputs/].
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving result.json [default: ./data/outputs/].
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Python interpreter with FMPy installed [default: python3].
    #[arg(long, value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Skip FMPy and report this problem instead (repeatable). Without any
    /// other problem text a single empty string marks a clean FMU.
    #[arg(long = "mock-problem", value_name = "TEXT")]
    pub mock_problems: Vec<String>,

    /// Also print the result JSON to stdout.
    #[arg(long)]
    pub print: bool,
}

impl MetricArgs {
    /// Layer config file and flags over the defaults.
    pub fn resolve_config(&self) -> Result<MetricConfig> {
        let mut config = match &self.config {
            Some(path) => MetricConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => MetricConfig::default(),
        };

        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(python) = &self.python {
            config.python = python.clone();
        }

        config.check().map_err(|reason| anyhow!("invalid configuration: {reason}"))?;
        Ok(config)
    }

    /// The validator selected by the flags.
    pub fn build_validator(&self, config: &MetricConfig) -> Box<dyn ModelDescriptionValidator> {
        if self.mock_problems.is_empty() {
            tracing::debug!(python = %config.python, "using FMPy validator");
            return Box::new(FmpyValidator::new(config.python.clone()));
        }

        let problems: Vec<&String> = self.mock_problems.iter().filter(|p| !p.is_empty()).collect();
        tracing::warn!(problems = problems.len(), "using mock validator; FMPy is not invoked");
        Box::new(MockValidator::with_problems(problems.into_iter().cloned()))
    }
}

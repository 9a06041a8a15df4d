//! # fmuc-cli — OCEAN Entry Point
//!
//! Provides the `fmu-check` binary. In the OCEAN container the binary is
//! started without arguments: it scans `./data/inputs/` for an FMU, checks
//! its modelDescription.xml, and writes the verdict to
//! `./data/outputs/result.json`.
//!
//! ```bash
//! fmu-check                      # container mode, fixed paths
//! fmu-check -v --input-dir in/   # local run with overrides
//! fmu-check --mock-problem "missing unit" --print
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the run itself ([`args`] vs [`ocean`]).
//! - A written negative verdict is a successful run; only infrastructure
//!   failures produce a non-zero exit status.

pub mod args;
pub mod ocean;

pub use ocean::{run_metric, RunReport};

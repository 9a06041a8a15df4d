//! # fmuc-core — FMU Check Foundations
//!
//! Types and filesystem plumbing shared by the FMU modelDescription check.
//! The validation itself is performed by an external collaborator (see
//! `fmuc-validate`); this crate only knows how to find FMUs, how a verdict
//! looks, and where it is written.
//!
//! ## Modules
//!
//! - [`record`] — the two-field [`ResultRecord`] and its fixed messages.
//! - [`discovery`] — recursive `.fmu` lookup under the input directory.
//! - [`writer`] — serialization of the record to `result.json`.
//! - [`config`] — input/output locations and interpreter selection.
//! - [`error`] — the [`MetricError`] hierarchy.
//!
//! ## Crate Policy
//!
//! - No `unwrap()` outside tests.
//! - I/O failures are returned, never folded into a negative verdict.

pub mod config;
pub mod discovery;
pub mod error;
pub mod record;
pub mod writer;

pub use config::MetricConfig;
pub use discovery::{find_fmu_files, is_fmu_file_name, FMU_EXTENSION};
pub use error::MetricError;
pub use record::ResultRecord;
pub use writer::write_result;

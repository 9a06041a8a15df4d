//! # fmuc-validate — Validation Invoker
//!
//! Hands an FMU to the external modelDescription validator and turns its
//! findings into a [`ResultRecord`](fmuc_core::ResultRecord).
//!
//! The checks themselves (XML schema, variable-name uniqueness, model
//! structure, start values, causality/variability, units) belong to FMPy and
//! are treated as opaque. This crate only defines the seam
//! ([`ModelDescriptionValidator`]) and two implementations of it:
//!
//! - [`FmpyValidator`] — runs `fmpy.validation.validate_fmu` in a Python
//!   child process.
//! - [`MockValidator`] — canned findings for tests and dry runs.

pub mod backend;
pub mod check;
pub mod fmpy;
pub mod mock;

pub use backend::{ModelDescriptionValidator, ValidatorError};
pub use check::check_fmu_model_description;
pub use fmpy::FmpyValidator;
pub use mock::MockValidator;

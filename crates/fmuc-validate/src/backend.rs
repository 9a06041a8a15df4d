//! # Validator Trait
//!
//! The contract with the external validator: given the path of an FMU
//! archive, return zero or more human-readable problem descriptions. An
//! empty list means the modelDescription.xml is clean.
//!
//! Problems are data, not errors. [`ValidatorError`] is reserved for the
//! validator itself breaking down, which the caller treats as fatal.

use std::path::Path;

use thiserror::Error;

/// Catastrophic failure of the external validator.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The validator process could not be started.
    #[error("failed to start validator {program}: {source}")]
    Spawn {
        /// Program that was executed.
        program: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The validator ran but exited unsuccessfully.
    #[error("validator exited with {status}: {stderr}")]
    Failed {
        /// Exit status as reported by the OS.
        status: String,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// The validator's output is not a list of problem strings.
    #[error("malformed validator output: {reason}")]
    MalformedOutput {
        /// Human-readable reason.
        reason: String,
    },
}

/// Checks the modelDescription.xml of an FMU archive.
pub trait ModelDescriptionValidator {
    /// Validate the FMU at `fmu` and return the problems found, in the
    /// validator's order.
    fn validate(&self, fmu: &Path) -> Result<Vec<String>, ValidatorError>;
}

impl<V: ModelDescriptionValidator + ?Sized> ModelDescriptionValidator for &V {
    fn validate(&self, fmu: &Path) -> Result<Vec<String>, ValidatorError> {
        (**self).validate(fmu)
    }
}

impl<V: ModelDescriptionValidator + ?Sized> ModelDescriptionValidator for Box<V> {
    fn validate(&self, fmu: &Path) -> Result<Vec<String>, ValidatorError> {
        (**self).validate(fmu)
    }
}

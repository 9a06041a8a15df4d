//! # Mock Validator
//!
//! Returns a fixed problem list for every FMU and records how often it was
//! asked. Lets the orchestration run end to end without a Python
//! installation.

use std::cell::Cell;
use std::path::Path;

use crate::backend::{ModelDescriptionValidator, ValidatorError};

/// Deterministic stand-in for the external validator.
#[derive(Debug, Default)]
pub struct MockValidator {
    problems: Vec<String>,
    calls: Cell<usize>,
}

impl MockValidator {
    /// A validator that finds no problems.
    pub fn clean() -> Self {
        Self::default()
    }

    /// A validator that reports `problems` for every FMU.
    pub fn with_problems<I, S>(problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            problems: problems.into_iter().map(Into::into).collect(),
            calls: Cell::new(0),
        }
    }

    /// Number of times [`validate`](ModelDescriptionValidator::validate) ran.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ModelDescriptionValidator for MockValidator {
    fn validate(&self, fmu: &Path) -> Result<Vec<String>, ValidatorError> {
        self.calls.set(self.calls.get() + 1);
        tracing::debug!(fmu = %fmu.display(), problems = self.problems.len(), "mock validation");
        Ok(self.problems.clone())
    }
}

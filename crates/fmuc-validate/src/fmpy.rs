//! # FMPy Backend
//!
//! Runs `fmpy.validation.validate_fmu` in a Python child process. The
//! inline script receives the FMU path as `argv[1]` and prints the problem
//! list as a JSON array of strings on its last line of stdout.
//!
//! The child only reads the archive; nothing is written next to the FMU.

use std::path::Path;
use std::process::Command;

use crate::backend::{ModelDescriptionValidator, ValidatorError};

/// FMPy release the metric was qualified against.
pub const FMPY_VERSION: &str = "0.3.22";

const VALIDATE_SCRIPT: &str = r#"
import json, sys
from fmpy.validation import validate_fmu
problems = validate_fmu(sys.argv[1])
sys.stdout.write("\n" + json.dumps([str(p) for p in problems]) + "\n")
"#;

/// Validator backed by an FMPy installation.
#[derive(Debug, Clone)]
pub struct FmpyValidator {
    python: String,
}

impl FmpyValidator {
    /// Use the given interpreter (name on `PATH` or absolute path).
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Interpreter this validator runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl ModelDescriptionValidator for FmpyValidator {
    fn validate(&self, fmu: &Path) -> Result<Vec<String>, ValidatorError> {
        tracing::debug!(
            python = %self.python,
            fmpy = FMPY_VERSION,
            fmu = %fmu.display(),
            "invoking FMPy validator"
        );

        let output = Command::new(&self.python)
            .arg("-c")
            .arg(VALIDATE_SCRIPT)
            .arg(fmu)
            .output()
            .map_err(|source| ValidatorError::Spawn {
                program: self.python.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ValidatorError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_problems(&output.stdout)
    }
}

/// Extract the problem list from the last non-blank stdout line.
pub(crate) fn parse_problems(stdout: &[u8]) -> Result<Vec<String>, ValidatorError> {
    let text = std::str::from_utf8(stdout).map_err(|e| ValidatorError::MalformedOutput {
        reason: format!("stdout is not UTF-8: {e}"),
    })?;

    let last = text
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| ValidatorError::MalformedOutput {
            reason: "validator produced no output".to_string(),
        })?;

    serde_json::from_str::<Vec<String>>(last).map_err(|e| ValidatorError::MalformedOutput {
        reason: format!("expected a JSON array of strings, got {last:?}: {e}"),
    })
}

//! # modelDescription Check
//!
//! Turns an optional FMU path into a [`ResultRecord`]. Missing inputs become
//! negative verdicts; the validator's findings become the log. Only a
//! breakdown of the validator itself is returned as an error.

use std::path::Path;

use fmuc_core::record::{MSG_FMU_NOT_FOUND, MSG_PATH_MISSING};
use fmuc_core::ResultRecord;

use crate::backend::{ModelDescriptionValidator, ValidatorError};

/// Check the modelDescription.xml of the FMU at `fmu_path`.
///
/// Covered by the validator: XML schema conformance, uniqueness and
/// validity of variable names, completeness of the ModelStructure, required
/// start values, causality/variability combinations, and units.
///
/// - `None` or an empty path: `result=false`, "The path to the FMU is missing".
/// - No regular file at the path: `result=false`, "For the given path to
///   the FMU, no FMU could be found".
/// - Otherwise the validator's problems decide the verdict
///   (see [`ResultRecord::from_problems`]).
pub fn check_fmu_model_description<V>(
    validator: &V,
    fmu_path: Option<&Path>,
) -> Result<ResultRecord, ValidatorError>
where
    V: ModelDescriptionValidator + ?Sized,
{
    let path = match fmu_path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(ResultRecord::failed(MSG_PATH_MISSING)),
    };

    if !path.is_file() {
        tracing::warn!(fmu = %path.display(), "no regular file at FMU path");
        return Ok(ResultRecord::failed(MSG_FMU_NOT_FOUND));
    }

    let problems = validator.validate(path)?;
    tracing::info!(
        fmu = %path.display(),
        problems = problems.len(),
        "modelDescription validated"
    );
    Ok(ResultRecord::from_problems(&problems))
}

//! # OCEAN Run
//!
//! Composes the metric for a run-once container: resolve the FMU from the
//! input mount, check it (or short-circuit when there is none), and write
//! the verdict to the output mount.
//!
//! `Idle → Resolved(found | empty) → Validated | ShortCircuited → Written`

use std::path::PathBuf;

use anyhow::{Context, Result};

use fmuc_core::record::MSG_NO_FMU_PROVIDED;
use fmuc_core::{find_fmu_files, write_result, MetricConfig, ResultRecord};
use fmuc_validate::{check_fmu_model_description, ModelDescriptionValidator};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// FMU handed to the validator, if one was found.
    pub fmu: Option<PathBuf>,
    /// Verdict that was written.
    pub record: ResultRecord,
    /// Location of the written result file.
    pub result_path: PathBuf,
}

/// Execute the metric once against `config`.
///
/// With several FMUs in the input tree the first one reported by the
/// directory walk is checked; which one that is depends on the filesystem.
pub fn run_metric<V>(config: &MetricConfig, validator: &V) -> Result<RunReport>
where
    V: ModelDescriptionValidator + ?Sized,
{
    tracing::debug!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting FMU modelDescription check"
    );

    let candidates = find_fmu_files(&config.input_dir).context("failed to resolve FMU input")?;
    tracing::info!(count = candidates.len(), "FMU candidates found");
    if candidates.len() > 1 {
        tracing::warn!(
            count = candidates.len(),
            "several FMUs provided; only the first is checked"
        );
    }

    let fmu = candidates.into_iter().next();
    let record = match fmu.as_deref() {
        Some(path) => {
            tracing::info!(fmu = %path.display(), "checking FMU");
            check_fmu_model_description(validator, Some(path))
                .with_context(|| format!("validator failed on {}", path.display()))?
        }
        None => ResultRecord::failed(MSG_NO_FMU_PROVIDED),
    };

    let result_path = write_result(&config.output_dir, &config.result_file_name, &record)
        .context("failed to write result record")?;

    Ok(RunReport {
        fmu,
        record,
        result_path,
    })
}

//! # Result Writer
//!
//! Persists a [`ResultRecord`] as JSON into the output mount, replacing any
//! earlier result. The file handle lives inside a `BufWriter` scoped to
//! [`write_result`]; it is closed when that scope ends on every path. The
//! explicit `flush` makes buffered write failures visible instead of losing
//! them in `Drop`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::MetricError;
use crate::record::ResultRecord;

/// Serialize `record` and write it to `dir/file_name`, truncating any
/// previous content. Returns the path that was written.
///
/// The output directory is expected to exist (it is mounted by the
/// orchestrator); a missing directory surfaces as
/// [`MetricError::OutputWrite`].
pub fn write_result(
    dir: &Path,
    file_name: &str,
    record: &ResultRecord,
) -> Result<PathBuf, MetricError> {
    let json = record.to_json()?;
    let path = dir.join(file_name);
    let write_err = |source: std::io::Error| MetricError::OutputWrite {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(json.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    drop(out);

    tracing::info!(
        path = %path.display(),
        result = record.result,
        "result record written"
    );
    Ok(path)
}

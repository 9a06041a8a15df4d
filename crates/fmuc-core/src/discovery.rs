//! # Input Discovery
//!
//! Recursive lookup of FMU archives below the mounted input directory.
//!
//! The walk is top-down: the files of a directory are reported before any of
//! its subdirectories are entered. Entry order inside a directory is whatever
//! the filesystem yields; no sorting is applied, so with several FMUs the
//! "first" one is platform-dependent. Directory symlinks are not followed.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::MetricError;

/// Filename suffix identifying an FMU archive.
pub const FMU_EXTENSION: &str = ".fmu";

/// Whether a filename carries the FMU suffix (case-sensitive).
pub fn is_fmu_file_name<S: AsRef<OsStr>>(name: S) -> bool {
    name.as_ref().to_string_lossy().ends_with(FMU_EXTENSION)
}

/// Return every regular file below `root` whose name ends with `.fmu`.
///
/// An empty result is not an error. Any directory that cannot be listed
/// aborts the scan with [`MetricError::InputScan`].
pub fn find_fmu_files(root: &Path) -> Result<Vec<PathBuf>, MetricError> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    tracing::debug!(
        root = %root.display(),
        count = found.len(),
        "scanned input directory"
    );
    Ok(found)
}

fn walk(dir: &Path, acc: &mut Vec<PathBuf>) -> Result<(), MetricError> {
    let scan_err = |source: std::io::Error| MetricError::InputScan {
        path: dir.to_path_buf(),
        source,
    };

    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let file_type = entry.file_type().map_err(scan_err)?;
        let path = entry.path();
        if file_type.is_dir() {
            subdirs.push(path);
        } else if is_fmu_file_name(entry.file_name()) && path.is_file() {
            acc.push(path);
        }
    }

    for sub in subdirs {
        walk(&sub, acc)?;
    }
    Ok(())
}

//! # Error Hierarchy
//!
//! Failures that abort a metric run. Anything listed here is an
//! infrastructure problem (unreadable input mount, unwritable output mount,
//! broken config), never a validation verdict.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving inputs, loading configuration, or writing
/// the result record.
#[derive(Error, Debug)]
pub enum MetricError {
    /// A directory under the input root could not be read.
    #[error("failed to scan input directory {path}: {source}")]
    InputScan {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The result file could not be created, written, or flushed.
    #[error("failed to write result file {path}: {source}")]
    OutputWrite {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The result record could not be serialized.
    #[error("failed to serialize result record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configuration file is unreadable or malformed.
    #[error("invalid configuration {path}: {reason}")]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Human-readable reason for the rejection.
        reason: String,
    },
}

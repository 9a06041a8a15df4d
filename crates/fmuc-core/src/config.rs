//! # Metric Configuration
//!
//! Fixed locations of the OCEAN run, expressed as an explicit value passed
//! into the orchestration entry point. Defaults reproduce the container
//! layout (`./data/inputs/`, `./data/outputs/result.json`); a YAML file can
//! override individual keys.
//!
//! ```yaml
//! input_dir: /mnt/inputs
//! output_dir: /mnt/outputs
//! python: /opt/venv/bin/python
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MetricError;

/// Directory scanned for FMUs when nothing else is configured.
pub const DEFAULT_INPUT_DIR: &str = "./data/inputs/";

/// Directory receiving the result file when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./data/outputs/";

/// Name of the file the verdict is written to.
pub const DEFAULT_RESULT_FILE: &str = "result.json";

/// Interpreter used to run the FMPy validator.
pub const DEFAULT_PYTHON: &str = "python3";

/// Locations and collaborators for a single metric run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricConfig {
    /// Root of the recursive FMU search.
    pub input_dir: PathBuf,
    /// Directory the result file is written into.
    pub output_dir: PathBuf,
    /// File name of the result inside `output_dir`.
    pub result_file_name: String,
    /// Python interpreter with FMPy installed.
    pub python: String,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            result_file_name: DEFAULT_RESULT_FILE.to_string(),
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    result_file_name: Option<String>,
    python: Option<String>,
}

impl MetricConfig {
    /// Defaults overlaid with the keys present in a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, MetricError> {
        let content = std::fs::read_to_string(path).map_err(|e| MetricError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::default().overlay_yaml(&content, path)
    }

    fn overlay_yaml(mut self, content: &str, origin: &Path) -> Result<Self, MetricError> {
        let invalid = |reason: String| MetricError::Config {
            path: origin.to_path_buf(),
            reason,
        };

        // An empty document deserializes to `()`, not a map.
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?
        };

        if let Some(dir) = file.input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = file.output_dir {
            self.output_dir = dir;
        }
        if let Some(name) = file.result_file_name {
            self.result_file_name = name;
        }
        if let Some(python) = file.python {
            self.python = python;
        }

        self.check().map_err(invalid)?;
        Ok(self)
    }

    /// Reject values that cannot describe a usable run.
    pub fn check(&self) -> Result<(), String> {
        let name = Path::new(&self.result_file_name);
        if self.result_file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(format!(
                "result_file_name must be a plain file name, got {:?}",
                self.result_file_name
            ));
        }
        if self.python.trim().is_empty() {
            return Err("python must name an interpreter".to_string());
        }
        Ok(())
    }

    /// Full path of the result file.
    pub fn result_path(&self) -> PathBuf {
        self.output_dir.join(&self.result_file_name)
    }
}

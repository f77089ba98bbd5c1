//! JSON job files: a grid description plus where and how to write it.
use super::grid::GridConfig;
use crate::error::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    #[serde(flatten)]
    pub grid: GridConfig,
    /// Requested image path; in split mode the base for the derived names.
    pub output: PathBuf,
    /// Write horizontal and vertical rules to two separate images.
    pub separate_files: bool,
    /// Optional path for the JSON render report.
    pub report_json: Option<PathBuf>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            output: PathBuf::from("mousepad.png"),
            separate_files: false,
            report_json: None,
        }
    }
}

pub fn load_job_config(path: &Path) -> Result<JobConfig> {
    let data = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| GeneratorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

//! Analysis configuration.
//!
//! The sequential function and the excluded set are never inferred from the
//! data; they come from here. A config file is JSON, any missing field takes
//! its default:
//!
//! ```json
//! {
//!   "sequential_function": "transpose_sequential",
//!   "excluded_functions": ["is_symmetric_sequential"],
//!   "cohort_tolerance": 0.1
//! }
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{cohort::DEFAULT_TOLERANCE, errors::BenchScaleError};

/// Environment variable naming a config file when no path is given.
pub const CONFIG_ENV: &str = "BENCHSCALE_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reference function for cross-function speedup; excluded from the
    /// scaling views.
    pub sequential_function: String,
    /// Functions left out of the overall speedup view, e.g. correctness checks.
    pub excluded_functions: Vec<String>,
    /// Half-width of the band around the modal per-thread problem size.
    pub cohort_tolerance: f64,
    /// Functions given a mean execution time series.
    pub execution_time_functions: Vec<String>,
    /// Functions compared against the sequential one by mean time.
    pub comparison_functions: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sequential_function: "transpose_sequential".to_string(),
            excluded_functions: strings(&[
                "is_symmetric_sequential",
                "is_symmetric_implicit",
                "is_symmetric_omp",
            ]),
            cohort_tolerance: DEFAULT_TOLERANCE,
            execution_time_functions: strings(&[
                "transpose_implicit",
                "transpose_sequential",
                "transpose_mpi",
                "is_symmetric_mpi",
                "alltoall_transpose_mpi",
                "block_cyclic_transpose_mpi",
                "nonblocking_transpose_mpi",
            ]),
            comparison_functions: strings(&["transpose_implicit", "transpose_mpi"]),
        }
    }
}

impl AnalysisConfig {
    pub fn with_sequential<T: Into<String>>(mut self, name: T) -> Self {
        self.sequential_function = name.into();
        self
    }

    pub fn with_excluded(mut self, names: &[&str]) -> Self {
        self.excluded_functions = strings(names);
        self
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BenchScaleError> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|e| BenchScaleError::io(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_slice(&data)
            .map_err(|e| BenchScaleError::parse(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path first, then [`CONFIG_ENV`], then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, BenchScaleError> {
        if let Some(path) = path {
            return Self::from_json_file(path);
        }
        if let Ok(path) = env::var(CONFIG_ENV) {
            tracing::debug!(%path, "config from environment");
            return Self::from_json_file(PathBuf::from(path));
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), BenchScaleError> {
        if self.sequential_function.trim().is_empty() {
            return Err(BenchScaleError::invalid_input(
                "sequential_function must not be empty",
            ));
        }
        if !(self.cohort_tolerance.is_finite() && self.cohort_tolerance > 0.0) {
            return Err(BenchScaleError::invalid_input(format!(
                "cohort_tolerance must be positive, got {}",
                self.cohort_tolerance
            )));
        }
        Ok(())
    }
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

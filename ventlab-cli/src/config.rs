//! Serializable run configuration.
//!
//! A TOML file drives the `run` command:
//!
//! ```toml
//! [distribution]
//! alpha = 1.98
//! p_zero = 0.333
//! p_one = 0.333
//!
//! [simulation]
//! trials = 100000
//!
//! [histogram]
//! portfolio_size = 20
//! bin_width = 0.5
//! max_bin = 12.0
//!
//! [benchmark]
//! portfolio_sizes = [1, 5, 10, 20, 50, 100]
//! benchmarks = [1.0, 2.0, 3.0, 5.0, 10.0]
//! ```
//!
//! Only `[distribution]` is required; every other section falls back to
//! its defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a simulation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Full configuration for a `run` invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    pub distribution: DistributionSection,
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub histogram: HistogramSection,
    #[serde(default)]
    pub benchmark: BenchmarkSection,
}

impl SimConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Mixture distribution parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSection {
    /// Power-law shape parameter (> 1).
    pub alpha: f64,
    /// Probability of a total loss.
    #[serde(default)]
    pub p_zero: f64,
    /// Probability of exactly returning capital.
    #[serde(default)]
    pub p_one: f64,
}

/// Trial-count settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationSection {
    pub trials: usize,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self { trials: 10_000 }
    }
}

/// Histogram settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistogramSection {
    pub portfolio_size: usize,
    pub bin_width: f64,
    pub max_bin: f64,
}

impl Default for HistogramSection {
    fn default() -> Self {
        Self {
            portfolio_size: 20,
            bin_width: 0.5,
            max_bin: 12.0,
        }
    }
}

/// Benchmark-table settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchmarkSection {
    pub portfolio_sizes: Vec<usize>,
    pub benchmarks: Vec<f64>,
}

impl Default for BenchmarkSection {
    fn default() -> Self {
        Self {
            portfolio_sizes: vec![1, 5, 10, 20, 50, 100],
            benchmarks: vec![1.0, 2.0, 3.0, 5.0, 10.0],
        }
    }
}

//! Analysis configuration.
//!
//! A TOML file names the scenarios to analyse, the time horizons to
//! evaluate, and the shared input tables:
//!
//! ```toml
//! agwp_table = "data/AGWP_CO2.txt"
//! background_fuel = "data/E_bg_new_scen.txt"
//! horizons = [20, 50, 100]
//!
//! [[scenarios]]
//! name = "base"
//! directory = "data/base"
//! ```

use crate::errors::{AveqError, AveqResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One fleet/scenario entry: a name and the directory holding its response
/// and emission files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub directory: PathBuf,
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Scenarios to load and convert.
    pub scenarios: Vec<ScenarioConfig>,
    /// Time horizons (years) evaluated for every metric.
    #[serde(default = "default_horizons")]
    pub horizons: Vec<u32>,
    /// AGWP-of-CO2 lookup table, required by GWP* and EGWP*.
    pub agwp_table: PathBuf,
    /// Optional background fuel-use table for auxiliary figure axes.
    #[serde(default)]
    pub background_fuel: Option<PathBuf>,
}

/// Horizons used in the published figures.
fn default_horizons() -> Vec<u32> {
    vec![20, 50, 100]
}

impl AnalysisConfig {
    /// Read and parse a TOML configuration file.
    pub fn from_file(path: &Path) -> AveqResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AveqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|err| AveqError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

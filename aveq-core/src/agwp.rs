//! Absolute GWP of CO2 per time horizon.
//!
//! GWP* and EGWP* normalise forcing-derived quantities by `AGWP_CO2(H)`,
//! read from an external lookup table with one value per integer horizon
//! H = 1..=100. Horizons outside that domain are rejected rather than
//! extrapolated.

use crate::errors::{AveqError, AveqResult};
use crate::response::FloatValue;
use serde::{Deserialize, Serialize};

/// Smallest time horizon covered by the lookup table.
pub const MIN_HORIZON: u32 = 1;
/// Largest time horizon covered by the lookup table.
pub const MAX_HORIZON: u32 = 100;

/// Unit scaling applied to the raw table values on load, so that the AGWP
/// is consistent with forcing expressed in W/m^2.
const AGWP_UNIT_SCALE: FloatValue = 1e9;

/// Lookup table of CO2's absolute GWP per integer time horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgwpTable {
    /// `values[h - 1]` is `AGWP_CO2(h)`, already unit-scaled.
    values: Vec<FloatValue>,
}

impl AgwpTable {
    /// Build a table from the 100 raw file values, applying the unit scale.
    pub fn from_raw(raw: Vec<FloatValue>) -> AveqResult<Self> {
        let expected = (MAX_HORIZON - MIN_HORIZON + 1) as usize;
        if raw.len() != expected {
            return Err(AveqError::Data(format!(
                "AGWP table has {} entries, expected {}",
                raw.len(),
                expected
            )));
        }
        Ok(Self {
            values: raw.into_iter().map(|v| v * AGWP_UNIT_SCALE).collect(),
        })
    }

    /// `AGWP_CO2(horizon)`, failing fast outside the table domain.
    pub fn value(&self, horizon: u32) -> AveqResult<FloatValue> {
        if !(MIN_HORIZON..=MAX_HORIZON).contains(&horizon) {
            return Err(AveqError::InvalidHorizon {
                horizon,
                min: MIN_HORIZON,
                max: MAX_HORIZON,
            });
        }
        Ok(self.values[(horizon - MIN_HORIZON) as usize])
    }
}

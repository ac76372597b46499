//! CO2 emission and background fuel-use series.

use crate::errors::{AveqError, AveqResult};
use crate::response::{FloatValue, YearAxis};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Yearly CO2 mass emissions of one scenario.
///
/// The series is indexed positionally against the scenario's response axis;
/// it must start at the same year and cover at least as many years as any
/// converter needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionSeries {
    years: YearAxis,
    values: Array1<FloatValue>,
}

impl EmissionSeries {
    pub fn from_values(years: YearAxis, values: Array1<FloatValue>) -> AveqResult<Self> {
        if years.len() != values.len() {
            return Err(AveqError::Data(format!(
                "emission series has {} years but {} values",
                years.len(),
                values.len()
            )));
        }
        Ok(Self { years, values })
    }

    pub fn years(&self) -> &YearAxis {
        &self.years
    }

    pub fn values(&self) -> ArrayView1<'_, FloatValue> {
        self.values.view()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Emission in the year at positional index `index`.
    pub fn value(&self, index: usize) -> FloatValue {
        self.values[index]
    }

    /// Fail if the series has fewer than `required` entries.
    ///
    /// Converters call this before indexing so a short emission file is
    /// reported as such instead of surfacing as an index panic.
    pub fn ensure_covers(&self, required: usize) -> AveqResult<()> {
        if self.values.len() < required {
            return Err(AveqError::EmissionsTooShort {
                available: self.values.len(),
                required,
            });
        }
        Ok(())
    }

    /// Fail unless this series starts on `axis` and covers all of it.
    pub fn ensure_aligned(&self, axis: &YearAxis) -> AveqResult<()> {
        self.ensure_covers(axis.len())?;
        for (index, year) in axis.values().iter().enumerate() {
            if self.years.get(index) != Some(*year) {
                return Err(AveqError::Data(format!(
                    "emission series year {:?} at index {} does not match response year {}",
                    self.years.get(index),
                    index,
                    year
                )));
            }
        }
        Ok(())
    }
}

/// Multi-scenario background fuel-use table (`E_bg_new_scen.txt`).
///
/// One row per background scenario, aligned to a shared year axis. Columns
/// are exposed positionally; naming them is left to the plotting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundFuel {
    years: YearAxis,
    /// `[n_scenarios x T]` fuel use.
    fuel: Array2<FloatValue>,
}

impl BackgroundFuel {
    pub fn from_values(years: YearAxis, fuel: Array2<FloatValue>) -> AveqResult<Self> {
        if fuel.ncols() != years.len() {
            return Err(AveqError::Data(format!(
                "background fuel table has {} columns but the year axis has {} entries",
                fuel.ncols(),
                years.len()
            )));
        }
        Ok(Self { years, fuel })
    }

    pub fn years(&self) -> &YearAxis {
        &self.years
    }

    pub fn num_scenarios(&self) -> usize {
        self.fuel.nrows()
    }

    /// Fuel-use series of background scenario `index`.
    pub fn scenario(&self, index: usize) -> ArrayView1<'_, FloatValue> {
        self.fuel.row(index)
    }
}

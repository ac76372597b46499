//! Per-scenario response series produced by the upstream climate-response model.
//!
//! A [`ResponseSeries`] holds two parallel `[7 x T]` tables for one
//! fleet/scenario: radiative forcing (RF, mW/m^2) and temperature change
//! (dT, K), one row per [`Species`], aligned to a shared [`YearAxis`].
//! Both tables are immutable once loaded; the metric converters treat them
//! as pure inputs.

use crate::errors::{AveqError, AveqResult};
use crate::species::Species;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Floating point value type used across the workspace.
pub type FloatValue = f64;

/// A strictly increasing sequence of integer years.
///
/// All per-species response files of one scenario must share the same axis;
/// the loader rejects any file that deviates from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAxis {
    years: Vec<i64>,
}

impl YearAxis {
    /// Build an axis from raw years, rejecting non-increasing sequences.
    pub fn from_years(years: Vec<i64>) -> AveqResult<Self> {
        for pair in years.windows(2) {
            if pair[1] <= pair[0] {
                return Err(AveqError::NonMonotonicAxis {
                    previous: pair[0],
                    year: pair[1],
                });
            }
        }
        Ok(Self { years })
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.years
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.years.get(index).copied()
    }

    /// The contiguous sub-axis covering `range`.
    ///
    /// Used to align converter outputs with the years they describe.
    pub fn subaxis(&self, range: Range<usize>) -> YearAxis {
        YearAxis {
            years: self.years[range].to_vec(),
        }
    }
}

/// RF and dT tables for one scenario, aligned to one [`YearAxis`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSeries {
    years: YearAxis,
    /// Radiative forcing, `[7 x T]`, mW/m^2.
    rf: Array2<FloatValue>,
    /// Temperature change, `[7 x T]`, K.
    dt: Array2<FloatValue>,
}

impl ResponseSeries {
    /// Assemble a series from the six component rows of each quantity.
    ///
    /// `rf_components` and `dt_components` are `[6 x T]`, ordered as
    /// [`Species::COMPONENTS`]. The `Total` row is computed here as the
    /// column-wise sum of the components.
    pub fn from_components(
        years: YearAxis,
        rf_components: Array2<FloatValue>,
        dt_components: Array2<FloatValue>,
    ) -> AveqResult<Self> {
        let expected = (Species::COMPONENTS.len(), years.len());
        for (name, table) in [("RF", &rf_components), ("dT", &dt_components)] {
            if table.dim() != expected {
                return Err(AveqError::Data(format!(
                    "{} component table is {:?}, expected {:?}",
                    name,
                    table.dim(),
                    expected
                )));
            }
        }

        Ok(Self {
            years,
            rf: with_total_row(&rf_components),
            dt: with_total_row(&dt_components),
        })
    }

    pub fn years(&self) -> &YearAxis {
        &self.years
    }

    /// Number of years in the series.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Radiative forcing table, `[7 x T]`, mW/m^2.
    pub fn rf(&self) -> ArrayView2<'_, FloatValue> {
        self.rf.view()
    }

    /// Temperature change table, `[7 x T]`, K.
    pub fn dt(&self) -> ArrayView2<'_, FloatValue> {
        self.dt.view()
    }

    pub fn rf_row(&self, species: Species) -> ArrayView1<'_, FloatValue> {
        self.rf.row(species.row())
    }

    pub fn dt_row(&self, species: Species) -> ArrayView1<'_, FloatValue> {
        self.dt.row(species.row())
    }
}

/// Prepend the computed `Total` row to a `[6 x T]` component table.
fn with_total_row(components: &Array2<FloatValue>) -> Array2<FloatValue> {
    let total = components.sum_axis(Axis(0));
    let mut table = Array2::zeros((Species::COUNT, components.ncols()));
    table.row_mut(Species::Total.row()).assign(&total);
    for (offset, species) in Species::COMPONENTS.iter().enumerate() {
        table.row_mut(species.row()).assign(&components.row(offset));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn axis(range: std::ops::Range<i64>) -> YearAxis {
        YearAxis::from_years(range.collect()).unwrap()
    }

    #[test]
    fn year_axis_rejects_non_increasing_years() {
        assert!(YearAxis::from_years(vec![2020, 2021, 2021]).is_err());
        assert!(YearAxis::from_years(vec![2020, 2019]).is_err());
        assert!(YearAxis::from_years(vec![2020, 2021, 2025]).is_ok());
    }

    #[test]
    fn subaxis_preserves_alignment() {
        let years = axis(2000..2010);
        let sub = years.subaxis(3..6);
        assert_eq!(sub.values(), &[2003, 2004, 2005]);
    }

    #[test]
    fn total_row_is_sum_of_components() {
        let rf = array![
            [1.0, 2.0],
            [0.5, 0.5],
            [0.0, 1.0],
            [2.0, 2.0],
            [1.0, 0.0],
            [0.5, 1.5],
        ];
        let dt = rf.mapv(|v| v * 0.1);
        let series = ResponseSeries::from_components(axis(2000..2002), rf, dt).unwrap();

        for t in 0..series.len() {
            let rf_sum: f64 = Species::COMPONENTS
                .iter()
                .map(|s| series.rf()[[s.row(), t]])
                .sum();
            let dt_sum: f64 = Species::COMPONENTS
                .iter()
                .map(|s| series.dt()[[s.row(), t]])
                .sum();
            assert_relative_eq!(series.rf()[[Species::Total.row(), t]], rf_sum, epsilon = 1e-12);
            assert_relative_eq!(series.dt()[[Species::Total.row(), t]], dt_sum, epsilon = 1e-12);
        }
        assert_relative_eq!(series.rf()[[0, 0]], 5.0);
    }

    #[test]
    fn serde_roundtrip() {
        let rf = Array2::ones((6, 3));
        let dt = Array2::zeros((6, 3));
        let series = ResponseSeries::from_components(axis(2000..2003), rf, dt).unwrap();

        let json = serde_json::to_string(&series).unwrap();
        let restored: ResponseSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.years(), series.years());
        assert_relative_eq!(restored.rf()[[0, 1]], 6.0);
    }

    #[test]
    fn component_shape_is_validated() {
        let bad = Array2::zeros((5, 3));
        let good = Array2::zeros((6, 3));
        let result = ResponseSeries::from_components(axis(2000..2003), bad, good);
        assert!(matches!(result, Err(AveqError::Data(_))));
    }
}

//! CO2-equivalent converter output.

use aveq_core::response::FloatValue;
use aveq_core::species::Species;
use aveq_core::YearAxis;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The CO2-equivalent emission table produced by one metric evaluation.
///
/// Shaped `[7 x T']` with one row per [`Species`], aligned to the
/// subsequence of the scenario's year axis that the metric could evaluate
/// (`T' <= T`, metric-dependent). Row 0 equals the sum of rows 1..=6 for
/// every metric; the starred metrics recompute it after overwriting the
/// CO2 row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Co2eq {
    values: Array2<FloatValue>,
    years: YearAxis,
    /// Index into the source year axis of the first output column.
    offset: usize,
}

impl Co2eq {
    pub(crate) fn new(values: Array2<FloatValue>, years: YearAxis, offset: usize) -> Self {
        debug_assert_eq!(values.nrows(), Species::COUNT);
        debug_assert_eq!(values.ncols(), years.len());
        Self {
            values,
            years,
            offset,
        }
    }

    /// The `[7 x T']` CO2-equivalent table.
    pub fn values(&self) -> ArrayView2<'_, FloatValue> {
        self.values.view()
    }

    /// CO2-equivalent series of one channel.
    pub fn species(&self, species: Species) -> ArrayView1<'_, FloatValue> {
        self.values.row(species.row())
    }

    /// Years the output columns correspond to.
    pub fn years(&self) -> &YearAxis {
        &self.years
    }

    /// Number of output years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Index range of the output within the source year axis.
    pub fn source_range(&self) -> Range<usize> {
        self.offset..self.offset + self.years.len()
    }
}

/// Recompute the `Total` row as the sum of the component rows.
pub(crate) fn recompute_total(values: &mut Array2<FloatValue>) {
    let components = values.slice(ndarray::s![Species::CO2.row().., ..]);
    let total = components.sum_axis(Axis(0));
    values.row_mut(Species::Total.row()).assign(&total);
}

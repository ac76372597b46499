//! Shared synthetic fixtures for converter tests.

use aveq_core::emissions::EmissionSeries;
use aveq_core::response::{FloatValue, ResponseSeries, YearAxis};
use aveq_core::species::Species;
use ndarray::{Array1, Array2};

/// Year axis of `len` years starting at 2000.
pub(crate) fn axis(len: usize) -> YearAxis {
    YearAxis::from_years((2000..2000 + len as i64).collect()).unwrap()
}

/// Scenario with constant responses: the CO2 row holds `co2`, every other
/// component row holds `other`, for both RF and dT. Emissions are constant
/// `emission` over the same years.
pub(crate) fn constant_scenario(
    len: usize,
    co2: FloatValue,
    other: FloatValue,
    emission: FloatValue,
) -> (ResponseSeries, EmissionSeries) {
    let mut components = Array2::from_elem((Species::COMPONENTS.len(), len), other);
    components.row_mut(0).fill(co2);

    let responses =
        ResponseSeries::from_components(axis(len), components.clone(), components).unwrap();
    let emissions =
        EmissionSeries::from_values(axis(len), Array1::from_elem(len, emission)).unwrap();
    (responses, emissions)
}

/// Scenario built from one RF/dT series shared by all six components.
pub(crate) fn uniform_scenario(
    values: Vec<FloatValue>,
    emission: FloatValue,
) -> (ResponseSeries, EmissionSeries) {
    let len = values.len();
    let row = Array1::from(values);
    let mut components = Array2::zeros((Species::COMPONENTS.len(), len));
    for mut target in components.rows_mut() {
        target.assign(&row);
    }

    let responses =
        ResponseSeries::from_components(axis(len), components.clone(), components).unwrap();
    let emissions =
        EmissionSeries::from_values(axis(len), Array1::from_elem(len, emission)).unwrap();
    (responses, emissions)
}

/// Emission series over the standard axis from explicit values.
pub(crate) fn emissions_of(values: Vec<FloatValue>) -> EmissionSeries {
    let len = values.len();
    EmissionSeries::from_values(axis(len), Array1::from(values)).unwrap()
}

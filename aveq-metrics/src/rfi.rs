//! Radiative-forcing-ratio CO2 equivalence (RFI).
//!
//! The simplest of the metrics: the per-species response quantity is the
//! instantaneous radiative forcing itself, with no aggregation over the
//! horizon,
//!
//! $$ co2eq_i(t) = \frac{RF_i(t)}{RF_{CO2}(t)} \cdot E_{CO2}(t) $$
//!
//! evaluated for `t` in `[H, T-1)`: the horizon is skipped at the start and
//! the final year is excluded to stay index-aligned with the upstream model
//! output.

use crate::result::Co2eq;
use crate::window::{normalized_co2eq, rfi_range};
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::AveqResult;
use aveq_core::response::ResponseSeries;
use aveq_core::species::Species;
use ndarray::Array2;

/// Compute the RFI CO2-equivalent table for time horizon `horizon`.
pub fn rf_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
) -> AveqResult<Co2eq> {
    let range = rfi_range(horizon, responses.len())?;
    let rf = responses.rf();

    let mut quantity = Array2::zeros((Species::COUNT, range.len()));
    for (j, t) in range.clone().enumerate() {
        for species in Species::COMPONENTS {
            let row = species.row();
            quantity[[row, j]] = rf[[row, t]];
        }
    }

    let values = normalized_co2eq("RFI", &quantity, &range, emissions)?;
    Ok(Co2eq::new(
        values,
        responses.years().subaxis(range.clone()),
        range.start,
    ))
}

//! Global Temperature-change Potential CO2 equivalence (GTP).
//!
//! The response quantity is the temperature change at the horizon,
//!
//! $$ co2eq_i(t) = \frac{dT_i(t+H)}{dT_{CO2}(t+H)} \cdot E_{CO2}(t) $$
//!
//! for `t` in `[0, T-H)`: an instantaneous temperature-change ratio rather
//! than an integrated quantity.

use crate::result::Co2eq;
use crate::window::{normalized_co2eq, windowed_range};
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::AveqResult;
use aveq_core::response::ResponseSeries;
use aveq_core::species::Species;
use ndarray::Array2;

/// Compute the GTP CO2-equivalent table for time horizon `horizon`.
pub fn gtp_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
) -> AveqResult<Co2eq> {
    let range = windowed_range(horizon, responses.len())?;
    let h = horizon as usize;
    let dt = responses.dt();

    let mut quantity = Array2::zeros((Species::COUNT, range.len()));
    for (j, t) in range.clone().enumerate() {
        for species in Species::COMPONENTS {
            let row = species.row();
            quantity[[row, j]] = dt[[row, t + h]];
        }
    }

    let values = normalized_co2eq("GTP", &quantity, &range, emissions)?;
    Ok(Co2eq::new(
        values,
        responses.years().subaxis(range.clone()),
        range.start,
    ))
}

//! Average Temperature Response CO2 equivalence (ATR).
//!
//! The response quantity is the forward `H`-year mean of the temperature
//! change,
//!
//! $$ ATR_i(t) = \frac{1}{H} \sum_{k=t}^{t+H-1} dT_i(k) $$
//!
//! normalised by CO2's own ATR and scaled by the CO2 emission of year `t`,
//! for `t` in `[0, T-H)`.

use crate::result::Co2eq;
use crate::window::{forward_sum, normalized_co2eq, windowed_range};
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::AveqResult;
use aveq_core::response::ResponseSeries;
use aveq_core::species::Species;
use ndarray::Array2;

/// Compute the ATR CO2-equivalent table for time horizon `horizon`.
pub fn atr_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
) -> AveqResult<Co2eq> {
    let range = windowed_range(horizon, responses.len())?;
    let h = horizon as usize;

    let mut quantity = Array2::zeros((Species::COUNT, range.len()));
    for species in Species::COMPONENTS {
        let row = species.row();
        let temperature = responses.dt_row(species);
        for (j, t) in range.clone().enumerate() {
            quantity[[row, j]] = forward_sum(temperature, t, h) / h as f64;
        }
    }

    let values = normalized_co2eq("ATR", &quantity, &range, emissions)?;
    Ok(Co2eq::new(
        values,
        responses.years().subaxis(range.clone()),
        range.start,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{constant_scenario, uniform_scenario};
    use approx::assert_relative_eq;

    #[test]
    fn co2_multiplier_is_identically_one() {
        let (responses, emissions) = uniform_scenario(vec![0.3; 70], 17.0);
        let result = atr_co2eq(35, &responses, &emissions).unwrap();
        assert_eq!(result.len(), 35);
        for t in 0..result.len() {
            assert_relative_eq!(result.species(Species::CO2)[t], 17.0);
            assert_relative_eq!(result.species(Species::PMO)[t], 17.0);
        }
    }

    #[test]
    fn forward_mean_matches_a_hand_computed_window() {
        // dT_CH4(k) = k with CO2 held at 1: the H = 5 forward mean at t is
        // t + 2, which is the multiplier (and co2eq, at unit emissions).
        let len = 30;
        let h = 5u32;
        let (responses, emissions) = constant_scenario(len, 1.0, 0.0, 1.0);
        let mut dt_components = responses.dt().slice(ndarray::s![1.., ..]).to_owned();
        for t in 0..len {
            dt_components[[Species::CH4.row() - 1, t]] = t as f64;
        }
        let rf_components = responses.rf().slice(ndarray::s![1.., ..]).to_owned();
        let responses = aveq_core::ResponseSeries::from_components(
            crate::testing::axis(len),
            rf_components,
            dt_components,
        )
        .unwrap();

        let result = atr_co2eq(h, &responses, &emissions).unwrap();
        for t in 0..result.len() {
            assert_relative_eq!(result.species(Species::CH4)[t], t as f64 + 2.0);
        }
    }

    #[test]
    fn responds_to_temperature_not_forcing() {
        // Constant dT but wildly different RF: ATR must ignore RF entirely.
        let len = 60;
        let (responses, emissions) = constant_scenario(len, 2.0, 1.0, 10.0);
        let mut rf_components = responses.rf().slice(ndarray::s![1.., ..]).to_owned();
        rf_components.fill(1e6);
        let dt_components = responses.dt().slice(ndarray::s![1.., ..]).to_owned();
        let responses = aveq_core::ResponseSeries::from_components(
            crate::testing::axis(len),
            rf_components,
            dt_components,
        )
        .unwrap();

        let result = atr_co2eq(20, &responses, &emissions).unwrap();
        for t in 0..result.len() {
            assert_relative_eq!(result.species(Species::H2O)[t], 5.0);
        }
    }

    #[test]
    fn total_row_is_sum_of_components() {
        let (responses, emissions) = constant_scenario(50, 8.0, 0.5, 2.0);
        let result = atr_co2eq(10, &responses, &emissions).unwrap();
        for t in 0..result.len() {
            let sum: f64 = Species::COMPONENTS
                .iter()
                .map(|s| result.species(*s)[t])
                .sum();
            assert_relative_eq!(result.species(Species::Total)[t], sum, epsilon = 1e-12);
        }
    }
}

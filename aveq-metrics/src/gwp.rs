//! Global Warming Potential CO2 equivalence (GWP and EGWP).
//!
//! The response quantity is the absolute GWP over the horizon: the forward
//! `H`-year sum of radiative forcing,
//!
//! $$ AGWP_i(t) = \sum_{k=t}^{t+H-1} RF_i(k) $$
//!
//! normalised by CO2's own AGWP and scaled by the CO2 emission of year `t`,
//! for `t` in `[0, T-H)`.
//!
//! EGWP is the same aggregation applied to efficacy-scaled forcing: each
//! component row is multiplied by its literature efficacy before the sum,
//! and the total is recomputed from the scaled components.

use crate::efficacy::efficacy;
use crate::result::Co2eq;
use crate::window::{forward_sum, normalized_co2eq, windowed_range};
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::AveqResult;
use aveq_core::response::ResponseSeries;
use aveq_core::species::Species;
use ndarray::Array2;

/// Compute the GWP CO2-equivalent table for time horizon `horizon`.
pub fn gwp_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
) -> AveqResult<Co2eq> {
    agwp_co2eq("GWP", horizon, responses, emissions, false)
}

/// Compute the EGWP (efficacy-weighted GWP) CO2-equivalent table.
pub fn egwp_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
) -> AveqResult<Co2eq> {
    agwp_co2eq("EGWP", horizon, responses, emissions, true)
}

fn agwp_co2eq(
    metric: &'static str,
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
    apply_efficacy: bool,
) -> AveqResult<Co2eq> {
    let range = windowed_range(horizon, responses.len())?;
    let h = horizon as usize;

    let mut quantity = Array2::zeros((Species::COUNT, range.len()));
    for species in Species::COMPONENTS {
        let row = species.row();
        let scale = if apply_efficacy { efficacy(species) } else { 1.0 };
        let forcing = responses.rf_row(species);
        for (j, t) in range.clone().enumerate() {
            quantity[[row, j]] = scale * forward_sum(forcing, t, h);
        }
    }

    let values = normalized_co2eq(metric, &quantity, &range, emissions)?;
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
        // All species share identical forcing: every multiplier is 1 and
        // the CO2-equivalent equals the emission itself.
        let (responses, emissions) = uniform_scenario(vec![0.7; 60], 42.0);
        let result = gwp_co2eq(20, &responses, &emissions).unwrap();
        assert_eq!(result.len(), 40);
        for t in 0..result.len() {
            assert_relative_eq!(result.species(Species::CO2)[t], 42.0);
            assert_relative_eq!(result.species(Species::CH4)[t], 42.0);
        }
    }

    #[test]
    fn egwp_scales_h2o_agwp_by_efficacy() {
        // Constant unit forcing for every species: AGWP_i = H, and the
        // efficacy-scaled AGWP for H2O is 1.14 * H, i.e. a 1.14 multiplier.
        let h = 30;
        let (responses, emissions) = uniform_scenario(vec![1.0; 80], 1.0);
        let result = egwp_co2eq(h, &responses, &emissions).unwrap();
        for t in 0..result.len() {
            assert_relative_eq!(result.species(Species::H2O)[t], 1.14, epsilon = 1e-12);
            assert_relative_eq!(result.species(Species::O3)[t], 1.37, epsilon = 1e-12);
            assert_relative_eq!(result.species(Species::CO2)[t], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn gwp_uses_a_forward_window() {
        // Forcing is zero except in the final 10 years of the CH4 row, so
        // only windows reaching those years pick it up.
        let len = 50;
        let h = 10u32;
        let (responses, emissions) = constant_scenario(len, 1.0, 0.0, 1.0);
        let mut rf = responses.rf().to_owned();
        for t in 40..len {
            rf[[Species::CH4.row(), t]] = 1.0;
        }
        let rf_components = rf.slice(ndarray::s![1.., ..]).to_owned();
        let dt_components = responses.dt().slice(ndarray::s![1.., ..]).to_owned();
        let responses = aveq_core::ResponseSeries::from_components(
            crate::testing::axis(len),
            rf_components,
            dt_components,
        )
        .unwrap();

        let result = gwp_co2eq(h, &responses, &emissions).unwrap();
        // Window [20, 30) sees nothing.
        assert_relative_eq!(result.species(Species::CH4)[20], 0.0);
        // Window [35, 45) overlaps five of the forced years; CO2's AGWP is H.
        assert_relative_eq!(result.species(Species::CH4)[35], 5.0 / 10.0);
    }

    #[test]
    fn total_row_is_sum_for_both_variants() {
        let (responses, emissions) = constant_scenario(60, 4.0, 1.5, 9.0);
        for result in [
            gwp_co2eq(15, &responses, &emissions).unwrap(),
            egwp_co2eq(15, &responses, &emissions).unwrap(),
        ] {
            for t in 0..result.len() {
                let sum: f64 = Species::COMPONENTS
                    .iter()
                    .map(|s| result.species(*s)[t])
                    .sum();
                assert_relative_eq!(result.species(Species::Total)[t], sum, epsilon = 1e-12);
            }
        }
    }
}

//! Flow-based CO2 equivalence (GWP* and EGWP*).
//!
//! GWP* (Smith et al. extension) treats the change in forcing as the
//! emission-equivalent quantity instead of the forcing attributable to a
//! pulse. It combines a forcing-rate term over a fixed backward window with
//! a forcing-level term,
//!
//! $$ co2eq_i(t) = g \left[ (1-s) \frac{\Delta F_i(t)}{\Delta t}
//!     \frac{H}{AGWP_{CO2}(H)} + s \frac{\bar{F}_i(t)}{AGWP_{CO2}(H)} \right] $$
//!
//! with window `dt = 20`, weight `s = 0.25`,
//! `g = (1 - e^{-s/(1-s)}) / s`, the rate
//! `dF/dt_i(t) = (RF_i(t) - RF_i(t-dt)) / dt` and the level
//! `F-bar_i(t) = mean(RF_i(t-dt+1 ..= t))`, both converted from mW to W to
//! match the AGWP lookup.
//!
//! CO2's own GWP* contribution is defined as its direct emission, not a
//! flow-derived quantity: after the species rows are computed the CO2 row
//! is overwritten with the raw emission and the total re-summed. EGWP*
//! additionally scales the non-CO2 rows by the forcing efficacies before
//! the total is recomputed.

use crate::efficacy::efficacy;
use crate::result::{recompute_total, Co2eq};
use crate::window::warn_nonfinite;
use aveq_core::agwp::AgwpTable;
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::{AveqError, AveqResult};
use aveq_core::response::{FloatValue, ResponseSeries};
use aveq_core::species::Species;
use ndarray::{s, Array2};

/// Backward window (years) over which the forcing rate and level are taken.
pub const FLOW_WINDOW: usize = 20;

/// Weight of the forcing-level term relative to the forcing-rate term.
pub const FLOW_WEIGHT: FloatValue = 0.25;

/// mW/m^2 to W/m^2, matching the units of the AGWP lookup.
const FORCING_UNIT_SCALE: FloatValue = 1000.0;

/// The fixed scalar `g = (1 - e^{-s/(1-s)}) / s` of the Smith et al.
/// extension.
pub fn flow_factor() -> FloatValue {
    (1.0 - (-FLOW_WEIGHT / (1.0 - FLOW_WEIGHT)).exp()) / FLOW_WEIGHT
}

/// Compute the GWP* CO2-equivalent table for time horizon `horizon`.
///
/// `horizon` must lie within the AGWP table domain (1..=100).
pub fn gwp_star_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
    agwp: &AgwpTable,
) -> AveqResult<Co2eq> {
    star_co2eq("GWP*", horizon, responses, emissions, agwp, false)
}

/// Compute the EGWP* (efficacy-weighted GWP*) CO2-equivalent table.
pub fn egwp_star_co2eq(
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
    agwp: &AgwpTable,
) -> AveqResult<Co2eq> {
    star_co2eq("EGWP*", horizon, responses, emissions, agwp, true)
}

fn star_co2eq(
    metric: &'static str,
    horizon: u32,
    responses: &ResponseSeries,
    emissions: &EmissionSeries,
    agwp: &AgwpTable,
    apply_efficacy: bool,
) -> AveqResult<Co2eq> {
    let agwp_h = agwp.value(horizon)?;
    let len = responses.len();
    if len <= FLOW_WINDOW {
        return Err(AveqError::SeriesTooShort {
            required: FLOW_WINDOW + 1,
            len,
        });
    }
    let range = FLOW_WINDOW..len;
    emissions.ensure_covers(range.end)?;

    let g = flow_factor();
    let rf = responses.rf();
    let mut values = Array2::zeros((Species::COUNT, range.len()));
    for (j, t) in range.clone().enumerate() {
        for species in Species::COMPONENTS {
            let row = species.row();
            let rate = (rf[[row, t]] - rf[[row, t - FLOW_WINDOW]])
                / FLOW_WINDOW as FloatValue
                / FORCING_UNIT_SCALE;
            let level = rf.slice(s![row, t + 1 - FLOW_WINDOW..=t]).sum()
                / FLOW_WINDOW as FloatValue
                / FORCING_UNIT_SCALE;
            let mut co2eq = g
                * ((1.0 - FLOW_WEIGHT) * rate * horizon as FloatValue / agwp_h
                    + FLOW_WEIGHT * level / agwp_h);
            if apply_efficacy {
                co2eq *= efficacy(species);
            }
            values[[row, j]] = co2eq;
        }
        // CO2's own contribution is its direct emission in that year.
        values[[Species::CO2.row(), j]] = emissions.value(t);
    }

    recompute_total(&mut values);
    warn_nonfinite(metric, &values);
    Ok(Co2eq::new(
        values,
        responses.years().subaxis(range.clone()),
        range.start,
    ))
}

//! Index-range bookkeeping and normalisation shared by the converters.
//!
//! The per-metric index ranges, including RFI's additional exclusion of the
//! final year, are idiosyncrasies of the original numerical pipeline; the
//! published figures depend on exact index alignment, so they are kept here
//! as named range constructors rather than cleaned up.

use crate::result::recompute_total;
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::{AveqError, AveqResult};
use aveq_core::response::FloatValue;
use aveq_core::species::Species;
use ndarray::{s, Array2, ArrayView1};
use std::ops::Range;

/// Valid source-index range `[0, T - H)` shared by GWP, EGWP, GTP and ATR.
pub(crate) fn windowed_range(horizon: u32, len: usize) -> AveqResult<Range<usize>> {
    let max = len.saturating_sub(1);
    if max == 0 {
        return Err(AveqError::SeriesTooShort { required: 2, len });
    }
    if horizon < 1 || horizon as usize > max {
        return Err(AveqError::InvalidHorizon {
            horizon,
            min: 1,
            max: max as u32,
        });
    }
    Ok(0..len - horizon as usize)
}

/// Valid source-index range `[H, T-1)` used by RFI, of length `T - H - 1`.
///
/// The final year is excluded in addition to the horizon, matching a known
/// discrepancy of the upstream response model. Preserved for output
/// compatibility, not fixed.
pub(crate) fn rfi_range(horizon: u32, len: usize) -> AveqResult<Range<usize>> {
    let max = len.saturating_sub(2);
    if max == 0 {
        return Err(AveqError::SeriesTooShort { required: 3, len });
    }
    if horizon < 1 || horizon as usize > max {
        return Err(AveqError::InvalidHorizon {
            horizon,
            min: 1,
            max: max as u32,
        });
    }
    Ok(horizon as usize..len - 1)
}

/// Forward `horizon`-year sum of `row` starting at `t` (inclusive).
pub(crate) fn forward_sum(row: ArrayView1<'_, FloatValue>, t: usize, horizon: usize) -> FloatValue {
    row.slice(s![t..t + horizon]).sum()
}

/// Normalise a per-species response quantity by its CO2 row and scale by
/// the CO2 emission of the corresponding year.
///
/// `quantity` is `[7 x T']` with column `j` describing source index
/// `range.start + j`. The `Total` row of the output is recomputed from the
/// component rows, so it satisfies the total-equals-sum invariant even when
/// the quantity rows were rescaled (EGWP).
pub(crate) fn normalized_co2eq(
    metric: &'static str,
    quantity: &Array2<FloatValue>,
    range: &Range<usize>,
    emissions: &EmissionSeries,
) -> AveqResult<Array2<FloatValue>> {
    emissions.ensure_covers(range.end)?;

    let mut values = Array2::zeros((Species::COUNT, range.len()));
    for j in 0..range.len() {
        let denominator = quantity[[Species::CO2.row(), j]];
        let emission = emissions.value(range.start + j);
        for species in Species::COMPONENTS {
            let row = species.row();
            values[[row, j]] = quantity[[row, j]] / denominator * emission;
        }
    }
    recompute_total(&mut values);
    warn_nonfinite(metric, &values);
    Ok(values)
}

/// Report non-finite CO2-equivalents (zero CO2 response early in a series
/// before its forcing accumulates) without failing: the published analysis
/// starts after that transient.
pub(crate) fn warn_nonfinite(metric: &'static str, values: &Array2<FloatValue>) {
    let count = values.iter().filter(|v| !v.is_finite()).count();
    if count > 0 {
        log::warn!(
            "{}: {} non-finite CO2-equivalent values (typically a zero CO2 response in the normalisation)",
            metric,
            count
        );
    }
}

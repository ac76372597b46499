//! Climate-metric CO2-equivalence converters.
//!
//! Each converter takes a time horizon `H`, the per-species response series
//! of one scenario (radiative forcing and temperature change) and the
//! scenario's CO2 emission series, and returns a CO2-equivalent emission
//! table aligned to the subsequence of years the metric can evaluate.
//!
//! The pulse metrics (RFI, GWP, EGWP, GTP, ATR) share one pattern: compute
//! a per-species response quantity, normalise it by the CO2 row to obtain a
//! dimensionless multiplier, and scale the multiplier by the actual CO2
//! emission of the corresponding year. The flow metrics (GWP*, EGWP*)
//! instead derive an emission-equivalent directly from the forcing rate and
//! level, normalised by an external AGWP-of-CO2 lookup.
//!
//! Converters are pure functions over immutable arrays: no shared state, no
//! I/O, safely parallelisable across scenarios, metrics and horizons.

pub mod atr;
pub mod efficacy;
pub mod gtp;
pub mod gwp;
pub mod gwp_star;
pub mod kind;
pub mod result;
pub mod rfi;
mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use atr::atr_co2eq;
pub use gtp::gtp_co2eq;
pub use gwp::{egwp_co2eq, gwp_co2eq};
pub use gwp_star::{egwp_star_co2eq, gwp_star_co2eq};
pub use kind::MetricKind;
pub use result::Co2eq;
pub use rfi::rf_co2eq;

//! CO2-equivalent emission trajectories for aviation climate-impact
//! scenarios.
//!
//! This crate ties together the two workspace members and adds the
//! scenario/figure-data layer:
//!
//! - [`aveq_core`] loads per-species radiative-forcing and
//!   temperature-change series, CO2 emissions, background fuel use and the
//!   AGWP-of-CO2 lookup table from their flat-file formats.
//! - [`aveq_metrics`] converts the loaded series into CO2-equivalent
//!   emission tables under seven climate metrics: RFI, GWP, EGWP, GTP,
//!   ATR, GWP* and EGWP*.
//! - [`report`] evaluates a configured set of scenarios, metrics and time
//!   horizons and exposes the results as serializable figure data.
//!
//! The physical model that produces the input series (AirClim) is not part
//! of this repository; its outputs are read as-is.

pub mod report;

pub use aveq_core::{
    AgwpTable, AnalysisConfig, AveqError, AveqResult, BackgroundFuel, EmissionSeries, FloatValue,
    ResponseSeries, ScenarioConfig, Species, YearAxis,
};
pub use aveq_metrics::{
    atr_co2eq, egwp_co2eq, egwp_star_co2eq, gtp_co2eq, gwp_co2eq, gwp_star_co2eq, rf_co2eq, Co2eq,
    MetricKind,
};
pub use report::{run_analysis, Analysis, MetricCurve, Scenario, ScenarioReport, SpeciesSeries};

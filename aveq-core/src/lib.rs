//! Core data model and loaders for aviation climate-metric analysis.
//!
//! This crate reads precomputed per-species radiative-forcing and
//! temperature-change series (as produced by an external climate-response
//! model) plus the accompanying CO2 emission and fuel-use tables, into the
//! immutable structures consumed by the `aveq-metrics` converters.

pub mod agwp;
pub mod config;
pub mod emissions;
pub mod errors;
pub mod loader;
pub mod response;
pub mod species;

pub use agwp::AgwpTable;
pub use config::{AnalysisConfig, ScenarioConfig};
pub use emissions::{BackgroundFuel, EmissionSeries};
pub use errors::{AveqError, AveqResult};
pub use response::{FloatValue, ResponseSeries, YearAxis};
pub use species::Species;

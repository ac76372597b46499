//! Scenario assembly and figure-data export.
//!
//! This is the contract toward the external plotting layer: per scenario,
//! per metric, per horizon, a `(years, co2eq)` pair for every species row,
//! suitable for direct time-series rendering. No aggregation happens here
//! beyond what the converters already produce; chart rendering itself is
//! not part of this crate.

use aveq_core::agwp::AgwpTable;
use aveq_core::config::{AnalysisConfig, ScenarioConfig};
use aveq_core::emissions::{BackgroundFuel, EmissionSeries};
use aveq_core::errors::{AveqError, AveqResult};
use aveq_core::loader;
use aveq_core::response::{FloatValue, ResponseSeries};
use aveq_core::species::Species;
use aveq_metrics::{Co2eq, MetricKind};
use serde::{Deserialize, Serialize};

/// One fleet/scenario, fully loaded.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub responses: ResponseSeries,
    pub emissions: EmissionSeries,
}

impl Scenario {
    /// Load one scenario directory, validating that the emission series
    /// starts on the response axis and covers it.
    pub fn load(config: &ScenarioConfig) -> AveqResult<Self> {
        let responses = loader::load_response_series(&config.directory)?;
        let emissions = loader::load_emission_series(&config.directory)?;
        emissions.ensure_aligned(responses.years())?;
        log::debug!(
            "loaded scenario {:?}: {} response years starting {}",
            config.name,
            responses.len(),
            responses.years().get(0).unwrap_or_default()
        );
        Ok(Self {
            name: config.name.clone(),
            responses,
            emissions,
        })
    }

    /// Evaluate one metric at one horizon for this scenario.
    pub fn compute(
        &self,
        kind: MetricKind,
        horizon: u32,
        agwp: Option<&AgwpTable>,
    ) -> AveqResult<Co2eq> {
        kind.compute(horizon, &self.responses, &self.emissions, agwp)
    }
}

/// CO2-equivalent series of one species row, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSeries {
    pub species: Species,
    pub co2eq: Vec<FloatValue>,
}

/// One metric evaluation of one scenario: aligned years plus all rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCurve {
    pub metric: MetricKind,
    pub horizon: u32,
    pub years: Vec<i64>,
    pub series: Vec<SpeciesSeries>,
}

impl MetricCurve {
    pub fn from_result(metric: MetricKind, horizon: u32, result: &Co2eq) -> Self {
        Self {
            metric,
            horizon,
            years: result.years().values().to_vec(),
            series: Species::ALL
                .iter()
                .map(|&species| SpeciesSeries {
                    species,
                    co2eq: result.species(species).to_vec(),
                })
                .collect(),
        }
    }
}

/// All metric curves of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub curves: Vec<MetricCurve>,
}

impl ScenarioReport {
    /// Evaluate every metric at every configured horizon.
    pub fn build(scenario: &Scenario, horizons: &[u32], agwp: &AgwpTable) -> AveqResult<Self> {
        let mut curves = Vec::with_capacity(MetricKind::ALL.len() * horizons.len());
        for kind in MetricKind::ALL {
            for &horizon in horizons {
                let result = scenario.compute(kind, horizon, Some(agwp))?;
                curves.push(MetricCurve::from_result(kind, horizon, &result));
            }
        }
        Ok(Self {
            scenario: scenario.name.clone(),
            curves,
        })
    }

    /// Serialize the report for the plotting layer.
    pub fn to_json(&self) -> AveqResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| AveqError::Data(format!("cannot serialize report: {}", err)))
    }
}

/// Everything an analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub reports: Vec<ScenarioReport>,
    /// Background fuel use for auxiliary figure axes, when configured.
    pub background_fuel: Option<BackgroundFuel>,
}

/// Load every input an [`AnalysisConfig`] names and build one report per
/// scenario.
pub fn run_analysis(config: &AnalysisConfig) -> AveqResult<Analysis> {
    let agwp = loader::load_agwp_table(&config.agwp_table)?;
    let background_fuel = match &config.background_fuel {
        Some(path) => Some(loader::load_background_fuel(path)?),
        None => None,
    };

    let mut reports = Vec::with_capacity(config.scenarios.len());
    for entry in &config.scenarios {
        let scenario = Scenario::load(entry)?;
        reports.push(ScenarioReport::build(&scenario, &config.horizons, &agwp)?);
        log::info!(
            "computed {} metric curves for scenario {:?}",
            MetricKind::ALL.len() * config.horizons.len(),
            entry.name
        );
    }

    Ok(Analysis {
        reports,
        background_fuel,
    })
}

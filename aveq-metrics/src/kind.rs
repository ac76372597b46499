//! Metric selection and dispatch.

use crate::atr::atr_co2eq;
use crate::gtp::gtp_co2eq;
use crate::gwp::{egwp_co2eq, gwp_co2eq};
use crate::gwp_star::{egwp_star_co2eq, gwp_star_co2eq};
use crate::result::Co2eq;
use crate::rfi::rf_co2eq;
use aveq_core::agwp::AgwpTable;
use aveq_core::emissions::EmissionSeries;
use aveq_core::errors::{AveqError, AveqResult};
use aveq_core::response::ResponseSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The climate metrics this crate can convert to CO2-equivalents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    RFI,
    GWP,
    EGWP,
    GTP,
    ATR,
    GWPStar,
    EGWPStar,
}

impl MetricKind {
    /// All metrics, in the order the published figures present them.
    pub const ALL: [MetricKind; 7] = [
        MetricKind::RFI,
        MetricKind::GWP,
        MetricKind::EGWP,
        MetricKind::GTP,
        MetricKind::ATR,
        MetricKind::GWPStar,
        MetricKind::EGWPStar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::RFI => "RFI",
            MetricKind::GWP => "GWP",
            MetricKind::EGWP => "EGWP",
            MetricKind::GTP => "GTP",
            MetricKind::ATR => "ATR",
            MetricKind::GWPStar => "GWP*",
            MetricKind::EGWPStar => "EGWP*",
        }
    }

    /// Whether this metric needs the AGWP-of-CO2 lookup table.
    pub fn requires_agwp(&self) -> bool {
        matches!(self, MetricKind::GWPStar | MetricKind::EGWPStar)
    }

    /// Common entry point over all converters.
    ///
    /// `agwp` may be `None` for the pulse metrics; the starred metrics fail
    /// with [`AveqError::MissingAgwp`] without it.
    pub fn compute(
        &self,
        horizon: u32,
        responses: &ResponseSeries,
        emissions: &EmissionSeries,
        agwp: Option<&AgwpTable>,
    ) -> AveqResult<Co2eq> {
        match self {
            MetricKind::RFI => rf_co2eq(horizon, responses, emissions),
            MetricKind::GWP => gwp_co2eq(horizon, responses, emissions),
            MetricKind::EGWP => egwp_co2eq(horizon, responses, emissions),
            MetricKind::GTP => gtp_co2eq(horizon, responses, emissions),
            MetricKind::ATR => atr_co2eq(horizon, responses, emissions),
            MetricKind::GWPStar => {
                gwp_star_co2eq(horizon, responses, emissions, self.agwp_table(agwp)?)
            }
            MetricKind::EGWPStar => {
                egwp_star_co2eq(horizon, responses, emissions, self.agwp_table(agwp)?)
            }
        }
    }

    fn agwp_table<'a>(&self, agwp: Option<&'a AgwpTable>) -> AveqResult<&'a AgwpTable> {
        agwp.ok_or(AveqError::MissingAgwp {
            metric: self.label(),
        })
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::constant_scenario;
    use approx::assert_relative_eq;
    use aveq_core::response::FloatValue;
    use aveq_core::species::Species;

    fn table() -> AgwpTable {
        AgwpTable::from_raw((1..=100).map(|h| h as FloatValue).collect()).unwrap()
    }

    #[test]
    fn dispatch_matches_the_direct_converters() {
        let (responses, emissions) = constant_scenario(150, 9.0, 2.0, 4.0);
        let agwp = table();

        for kind in MetricKind::ALL {
            let dispatched = kind
                .compute(50, &responses, &emissions, Some(&agwp))
                .unwrap();
            let direct = match kind {
                MetricKind::RFI => rf_co2eq(50, &responses, &emissions),
                MetricKind::GWP => gwp_co2eq(50, &responses, &emissions),
                MetricKind::EGWP => egwp_co2eq(50, &responses, &emissions),
                MetricKind::GTP => gtp_co2eq(50, &responses, &emissions),
                MetricKind::ATR => atr_co2eq(50, &responses, &emissions),
                MetricKind::GWPStar => gwp_star_co2eq(50, &responses, &emissions, &agwp),
                MetricKind::EGWPStar => egwp_star_co2eq(50, &responses, &emissions, &agwp),
            }
            .unwrap();

            assert_eq!(dispatched.source_range(), direct.source_range());
            for t in 0..dispatched.len() {
                assert_relative_eq!(
                    dispatched.species(Species::Total)[t],
                    direct.species(Species::Total)[t]
                );
            }
        }
    }

    #[test]
    fn starred_metrics_demand_the_agwp_table() {
        let (responses, emissions) = constant_scenario(150, 9.0, 2.0, 4.0);

        for kind in MetricKind::ALL {
            let result = kind.compute(50, &responses, &emissions, None);
            if kind.requires_agwp() {
                assert!(matches!(result, Err(AveqError::MissingAgwp { .. })));
            } else {
                assert!(result.is_ok(), "{} should not need the table", kind);
            }
        }
    }

    #[test]
    fn labels_are_the_published_names() {
        assert_eq!(MetricKind::GWPStar.label(), "GWP*");
        assert_eq!(MetricKind::RFI.to_string(), "RFI");
    }
}

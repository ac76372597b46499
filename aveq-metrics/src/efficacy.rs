//! Forcing efficacies relative to CO2.
//!
//! Literature constants correcting a species' forcing for its differing
//! effectiveness at driving temperature change relative to CO2 (Ponater et
//! al., 2006). Applied by the EGWP and EGWP* converters; the plain metrics
//! weight every species equally.

use aveq_core::response::FloatValue;
use aveq_core::species::Species;

/// Efficacy per component channel, ordered as [`Species::COMPONENTS`]:
/// CO2, H2O, O3, CH4, Contrails, PMO.
pub const EFFICACY: [FloatValue; 6] = [1.0, 1.14, 1.37, 1.18, 0.59, 1.0];

/// Efficacy of one channel.
///
/// `Total` maps to 1.0: it is never scaled directly, only recomputed from
/// scaled component rows.
pub fn efficacy(species: Species) -> FloatValue {
    match species {
        Species::Total => 1.0,
        component => EFFICACY[component.row() - 1],
    }
}

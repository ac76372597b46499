//! Emission channels resolved by the upstream response model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The emission channels of an aviation scenario.
///
/// Every response and CO2-equivalent table is shaped `[7 x T]` with one row
/// per channel in this order. Row 0 (`Total`) is always the column-wise sum
/// of the six component rows; it is computed when a table is assembled,
/// never read from a file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Total,
    CO2,
    H2O,
    O3,
    CH4,
    Contrails,
    PMO,
}

impl Species {
    /// Number of rows in a response or CO2-equivalent table.
    pub const COUNT: usize = 7;

    /// All channels, in table-row order.
    pub const ALL: [Species; 7] = [
        Species::Total,
        Species::CO2,
        Species::H2O,
        Species::O3,
        Species::CH4,
        Species::Contrails,
        Species::PMO,
    ];

    /// The six component channels, i.e. everything except `Total`.
    pub const COMPONENTS: [Species; 6] = [
        Species::CO2,
        Species::H2O,
        Species::O3,
        Species::CH4,
        Species::Contrails,
        Species::PMO,
    ];

    /// Table row index of this channel.
    pub fn row(&self) -> usize {
        *self as usize
    }

    /// Inverse of [`Species::row`].
    pub fn from_row(row: usize) -> Option<Species> {
        Species::ALL.get(row).copied()
    }

    /// Token used in the per-species response file names,
    /// e.g. `RF_contrail_taumean_rfmean.txt`.
    ///
    /// `Total` has no file of its own.
    pub fn file_token(&self) -> Option<&'static str> {
        match self {
            Species::Total => None,
            Species::CO2 => Some("CO2"),
            Species::H2O => Some("H2O"),
            Species::O3 => Some("O3"),
            Species::CH4 => Some("CH4"),
            Species::Contrails => Some("contrail"),
            Species::PMO => Some("PMO"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::Total => "Total",
            Species::CO2 => "CO2",
            Species::H2O => "H2O",
            Species::O3 => "O3",
            Species::CH4 => "CH4",
            Species::Contrails => "Contrails",
            Species::PMO => "PMO",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

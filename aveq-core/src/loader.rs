//! Flat-file loaders for response, emission, fuel-use and AGWP tables.
//!
//! All scenario inputs are whitespace-delimited numeric tables with a fixed
//! two-line header: column 0 is the year, subsequent columns are values.
//! One file exists per emission species per physical quantity, named
//!
//! - `RF_<species>_taumean_rfmean.txt` (radiative forcing, mW/m^2)
//! - `dT_<species>_taumean_rfmean_lammean.txt` (temperature change, K)
//!
//! plus `CO2_emis.txt` (yearly CO2 mass emissions) per scenario directory
//! and a global `E_bg_new_scen.txt` (multi-scenario background fuel use).
//!
//! The RF CO2 file defines the scenario's year axis; every other response
//! file must match it exactly. A mismatch is a hard error, never a silent
//! truncation, because the converters assume row alignment.

use crate::agwp::AgwpTable;
use crate::emissions::{BackgroundFuel, EmissionSeries};
use crate::errors::{AveqError, AveqResult};
use crate::response::{FloatValue, ResponseSeries, YearAxis};
use crate::species::Species;
use ndarray::{Array1, Array2};
use std::fs;
use std::path::Path;

/// Header lines skipped at the top of every scenario table.
const TABLE_HEADER_LINES: usize = 2;

/// Emission series filename within a scenario directory.
pub const CO2_EMISSIONS_FILE: &str = "CO2_emis.txt";

/// Background fuel-use table shared across scenarios.
pub const BACKGROUND_FUEL_FILE: &str = "E_bg_new_scen.txt";

/// Radiative-forcing filename for one species.
pub fn rf_filename(species: Species) -> Option<String> {
    species
        .file_token()
        .map(|token| format!("RF_{}_taumean_rfmean.txt", token))
}

/// Temperature-change filename for one species.
pub fn dt_filename(species: Species) -> Option<String> {
    species
        .file_token()
        .map(|token| format!("dT_{}_taumean_rfmean_lammean.txt", token))
}

/// Load the RF and dT tables of one scenario directory.
pub fn load_response_series(dir: &Path) -> AveqResult<ResponseSeries> {
    // The RF CO2 file defines the year axis for the whole scenario.
    let reference = dir.join(rf_filename(Species::CO2).unwrap_or_default());
    let (axis_years, co2_rf) = read_year_value_table(&reference)?;

    let mut rf_rows = vec![co2_rf];
    for &species in &Species::COMPONENTS[1..] {
        let path = dir.join(rf_filename(species).unwrap_or_default());
        rf_rows.push(read_aligned_values(&path, &reference, &axis_years)?);
    }

    let mut dt_rows = Vec::with_capacity(Species::COMPONENTS.len());
    for species in Species::COMPONENTS {
        let path = dir.join(dt_filename(species).unwrap_or_default());
        dt_rows.push(read_aligned_values(&path, &reference, &axis_years)?);
    }

    let years = YearAxis::from_years(axis_years)?;
    let rf = rows_to_table(rf_rows, years.len())?;
    let dt = rows_to_table(dt_rows, years.len())?;
    log::debug!(
        "loaded response series from {}: {} species x {} years",
        dir.display(),
        Species::COMPONENTS.len(),
        years.len()
    );
    ResponseSeries::from_components(years, rf, dt)
}

/// Load the yearly CO2 emission series of one scenario directory.
pub fn load_emission_series(dir: &Path) -> AveqResult<EmissionSeries> {
    let path = dir.join(CO2_EMISSIONS_FILE);
    let (years, values) = read_year_value_table(&path)?;
    EmissionSeries::from_values(YearAxis::from_years(years)?, Array1::from(values))
}

/// Load the multi-scenario background fuel-use table.
pub fn load_background_fuel(path: &Path) -> AveqResult<BackgroundFuel> {
    let rows = read_table(path, TABLE_HEADER_LINES)?;
    let mut years = Vec::with_capacity(rows.len());
    let mut columns: Option<usize> = None;
    let mut fuel: Vec<Vec<FloatValue>> = Vec::new();

    for (line, row) in &rows {
        if row.len() < 2 {
            return Err(parse_error(path, *line, "expected a year and at least one value"));
        }
        let scenarios = row.len() - 1;
        match columns {
            None => {
                columns = Some(scenarios);
                fuel = vec![Vec::with_capacity(rows.len()); scenarios];
            }
            Some(expected) if expected != scenarios => {
                return Err(parse_error(
                    path,
                    *line,
                    &format!("expected {} value columns, found {}", expected, scenarios),
                ));
            }
            Some(_) => {}
        }
        years.push(integer_year(path, *line, row[0])?);
        for (column, value) in row[1..].iter().enumerate() {
            fuel[column].push(*value);
        }
    }

    let years = YearAxis::from_years(years)?;
    let table = rows_to_table(fuel, years.len())?;
    BackgroundFuel::from_values(years, table)
}

/// Load the AGWP-of-CO2 lookup table.
///
/// The file carries one line per integer time horizon H = 1..=100; the last
/// field of each line is the AGWP value (a leading horizon column, if
/// present, is ignored). No header.
pub fn load_agwp_table(path: &Path) -> AveqResult<AgwpTable> {
    let rows = read_table(path, 0)?;
    let mut raw = Vec::with_capacity(rows.len());
    for (line, row) in &rows {
        match row.last() {
            Some(value) => raw.push(*value),
            None => return Err(parse_error(path, *line, "empty table row")),
        }
    }
    AgwpTable::from_raw(raw)
}

/// Read a whitespace-delimited numeric table, skipping `header_lines` and
/// blank lines. Returns `(1-based line number, fields)` per data row.
fn read_table(path: &Path, header_lines: usize) -> AveqResult<Vec<(usize, Vec<FloatValue>)>> {
    let contents = fs::read_to_string(path).map_err(|source| AveqError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if index < header_lines {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|field| {
                field.parse::<FloatValue>().map_err(|_| {
                    parse_error(
                        path,
                        index + 1,
                        &format!("cannot parse {:?} as a number", field),
                    )
                })
            })
            .collect::<AveqResult<Vec<_>>>()?;
        rows.push((index + 1, row));
    }

    if rows.is_empty() {
        return Err(AveqError::Data(format!(
            "{} contains no data rows",
            path.display()
        )));
    }
    Ok(rows)
}

/// Read a `(year, value)` table into parallel vectors.
fn read_year_value_table(path: &Path) -> AveqResult<(Vec<i64>, Vec<FloatValue>)> {
    let rows = read_table(path, TABLE_HEADER_LINES)?;
    let mut years = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for (line, row) in &rows {
        if row.len() < 2 {
            return Err(parse_error(path, *line, "expected a year and a value"));
        }
        years.push(integer_year(path, *line, row[0])?);
        values.push(row[1]);
    }
    Ok((years, values))
}

/// Read a response file and fail unless its year column equals the axis
/// established by `reference`.
fn read_aligned_values(
    path: &Path,
    reference: &Path,
    axis_years: &[i64],
) -> AveqResult<Vec<FloatValue>> {
    let (years, values) = read_year_value_table(path)?;
    if years != axis_years {
        return Err(AveqError::AxisMismatch {
            path: path.to_path_buf(),
            reference: reference.to_path_buf(),
        });
    }
    Ok(values)
}

fn integer_year(path: &Path, line: usize, value: FloatValue) -> AveqResult<i64> {
    if value.fract().abs() > 1e-9 {
        return Err(parse_error(
            path,
            line,
            &format!("year column holds non-integer value {}", value),
        ));
    }
    Ok(value.round() as i64)
}

fn parse_error(path: &Path, line: usize, message: &str) -> AveqError {
    AveqError::Parse {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

fn rows_to_table(rows: Vec<Vec<FloatValue>>, ncols: usize) -> AveqResult<Array2<FloatValue>> {
    let nrows = rows.len();
    Array2::from_shape_vec((nrows, ncols), rows.concat()).map_err(|err| {
        AveqError::Data(format!("cannot shape table to [{} x {}]: {}", nrows, ncols, err))
    })
}

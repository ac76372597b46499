use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading and metric computation failures.
#[derive(Error, Debug)]
pub enum AveqError {
    #[error("{0}")]
    Data(String),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: malformed table row: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("year axis of {} does not match the scenario axis defined by {}", .path.display(), .reference.display())]
    AxisMismatch { path: PathBuf, reference: PathBuf },
    #[error("year axis must be strictly increasing (year {year} follows {previous})")]
    NonMonotonicAxis { previous: i64, year: i64 },
    #[error("emission series covers {available} years but {required} are required")]
    EmissionsTooShort { available: usize, required: usize },
    #[error("response series has {len} years but at least {required} are required")]
    SeriesTooShort { required: usize, len: usize },
    #[error("time horizon {horizon} is outside the valid domain {min}..={max}")]
    InvalidHorizon { horizon: u32, min: u32, max: u32 },
    #[error("metric {metric} requires an AGWP lookup table")]
    MissingAgwp { metric: &'static str },
    #[error("invalid analysis config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

/// Convenience type for `Result<T, AveqError>`.
pub type AveqResult<T> = Result<T, AveqError>;

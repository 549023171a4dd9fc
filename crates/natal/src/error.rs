use crate::ephemeris::EphemerisError;
use crate::time::TimeError;
use std::fmt;
use thiserror::Error;

/// Failures that abort a whole chart computation.
///
/// Per-object ephemeris failures are not represented here: those are recovered
/// by omitting the object from the chart.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("house cusps unavailable: {0}")]
    Houses(#[source] EphemerisError),
}

/// Which public operation was running when a fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Chart,
    Report,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Chart => f.write_str("Chart calculation"),
            Operation::Report => f.write_str("Report generation"),
        }
    }
}

/// The single user-facing error returned by the chart and report operations.
#[derive(Error, Debug)]
#[error("{operation} failed: {source}")]
pub struct ComputationFailed {
    pub operation: Operation,
    #[source]
    pub source: ChartError,
}

impl ComputationFailed {
    pub fn new(operation: Operation, source: ChartError) -> Self {
        Self { operation, source }
    }
}

//! Natal chart derivation.
//!
//! Resolves a local birth time to a UTC instant, queries an ephemeris provider
//! for the ten classical/modern planets plus the Ascendant and Midheaven, and
//! derives signs, Placidus house placements and major aspects from the
//! resulting longitudes.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod report;
pub mod service;
pub mod time;
pub mod western;

pub use chart::{BirthInput, ChartAssembler, ChartResult, NatalChart, Placement};
pub use error::{ChartError, ComputationFailed, Operation};
pub use report::{ChartReport, ReportRenderer};
pub use service::{health, HealthStatus, NatalService};

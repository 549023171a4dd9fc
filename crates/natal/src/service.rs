use crate::chart::{BirthInput, ChartAssembler, ChartResult};
use crate::ephemeris::EphemerisGateway;
use crate::error::{ComputationFailed, Operation};
use crate::report::{ChartReport, ReportRenderer};
use crate::time::TimezoneLookup;
use serde::{Deserialize, Serialize};

/// Chart and report operations over one ephemeris provider and timezone
/// lookup. Every call computes a fresh chart owned by the caller.
pub struct NatalService<E, L> {
    assembler: ChartAssembler<E, L>,
    renderer: ReportRenderer,
}

impl<E: EphemerisGateway, L: TimezoneLookup> NatalService<E, L> {
    pub fn new(ephemeris: E, lookup: L) -> Self {
        Self {
            assembler: ChartAssembler::new(ephemeris, lookup),
            renderer: ReportRenderer::new(),
        }
    }

    pub fn chart(&self, input: &BirthInput) -> Result<ChartResult, ComputationFailed> {
        self.assembler
            .assemble(input)
            .map(|chart| chart.result)
            .map_err(|e| ComputationFailed::new(Operation::Chart, e))
    }

    pub fn report(&self, input: &BirthInput) -> Result<ChartReport, ComputationFailed> {
        let chart = self
            .assembler
            .assemble(input)
            .map_err(|e| ComputationFailed::new(Operation::Report, e))?;
        Ok(self.renderer.render(&chart, input))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Liveness signal. Performs no computation.
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        message: "Natal chart engine is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

use crate::aspects::types::{Aspect, AspectKind};
use crate::ephemeris::{CelestialPosition, ChartObject};

/// Bodies that take part in aspect detection. Outer planets and angles are
/// deliberately left out.
pub const ASPECT_BODIES: [ChartObject; 7] = [
    ChartObject::Sun,
    ChartObject::Moon,
    ChartObject::Mercury,
    ChartObject::Venus,
    ChartObject::Mars,
    ChartObject::Jupiter,
    ChartObject::Saturn,
];

/// Minimal angular separation between two longitudes, in [0, 180].
///
/// Symmetric in its arguments and independent of where the 0°/360° seam falls.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    ((lon1 - lon2 + 540.0).rem_euclid(360.0) - 180.0).abs()
}

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    bodies: Vec<ChartObject>,
}

impl AspectCalculator {
    /// Calculator over the seven traditional bodies
    pub fn new() -> Self {
        Self {
            bodies: ASPECT_BODIES.to_vec(),
        }
    }

    /// Classify a separation against the fixed aspect table.
    ///
    /// Target angles are at least 60° apart and orbs at most 6°, so at most
    /// one kind can match.
    pub fn classify(&self, separation: f64) -> Option<(AspectKind, f64)> {
        AspectKind::ALL.iter().find_map(|kind| {
            let orb = (separation - kind.exact_angle()).abs();
            (orb <= kind.orb()).then_some((*kind, orb))
        })
    }

    /// Aspect between two positions, if any.
    pub fn calculate_aspect(
        &self,
        a: &CelestialPosition,
        b: &CelestialPosition,
    ) -> Option<Aspect> {
        let separation = angular_separation(a.lon, b.lon);
        self.classify(separation).map(|(kind, orb)| Aspect {
            from: a.object,
            to: b.object,
            kind,
            separation,
            orb,
        })
    }

    /// All aspects among the participating bodies present in `positions`.
    ///
    /// Pairs are visited once each, `i < j` in the fixed body order, so the
    /// output order does not depend on the order of `positions` and no pair is
    /// reported mirrored or against itself.
    pub fn aspects_among(&self, positions: &[CelestialPosition]) -> Vec<Aspect> {
        let present: Vec<&CelestialPosition> = self
            .bodies
            .iter()
            .filter_map(|body| positions.iter().find(|p| p.object == *body))
            .collect();

        let mut aspects = Vec::new();
        for i in 0..present.len() {
            for j in (i + 1)..present.len() {
                if let Some(aspect) = self.calculate_aspect(present[i], present[j]) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

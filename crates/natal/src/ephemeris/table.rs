//! Precomputed ephemeris.
//!
//! Answers every query with the same stored positions regardless of instant or
//! location. Useful for fixtures and for running the pipeline without the
//! Swiss Ephemeris data files.

use crate::ephemeris::gateway::{EphemerisError, EphemerisGateway};
use crate::ephemeris::types::{CelestialPosition, ChartObject, GeoLocation};
use crate::western::signs::normalize_degrees;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableEphemeris {
    #[serde(default)]
    positions: BTreeMap<ChartObject, CelestialPosition>,
    #[serde(default)]
    cusps: Option<[f64; 12]>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON: `{"positions": {"sun": {...}}, "cusps": [..12]}`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Store a direct-motion position.
    pub fn with_longitude(self, object: ChartObject, lon: f64) -> Self {
        self.with_position(CelestialPosition {
            object,
            lon,
            lat: 0.0,
            speed_lon: if object.is_point() { 0.0 } else { 1.0 },
            retrograde: false,
        })
    }

    pub fn with_position(mut self, position: CelestialPosition) -> Self {
        self.positions.insert(position.object, position);
        self
    }

    pub fn with_cusps(mut self, cusps: [f64; 12]) -> Self {
        self.cusps = Some(cusps);
        self
    }
}

impl EphemerisGateway for TableEphemeris {
    fn position_of(
        &self,
        object: ChartObject,
        _dt_utc: DateTime<Utc>,
        _location: GeoLocation,
    ) -> Result<CelestialPosition, EphemerisError> {
        let stored = self
            .positions
            .get(&object)
            .ok_or(EphemerisError::UnsupportedObject { object })?;

        // Angles carry no motion
        let retrograde = !object.is_point() && stored.retrograde;
        Ok(CelestialPosition {
            object,
            lon: normalize_degrees(stored.lon),
            retrograde,
            ..stored.clone()
        })
    }

    fn house_cusps(
        &self,
        _dt_utc: DateTime<Utc>,
        _location: GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        self.cusps
            .map(|c| c.map(normalize_degrees))
            .ok_or_else(|| EphemerisError::HouseCalculationFailed {
                message: "table has no house cusps".to_string(),
            })
    }
}

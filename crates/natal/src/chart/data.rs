use crate::ephemeris::{CelestialPosition, ChartObject, EphemerisError};
use crate::time::Accuracy;
use crate::western::{degree_within_sign, HouseCusp, HouseSystem, Sign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Birth data as supplied by the calling layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// "1992-02-17"
    pub date: String,
    /// "14:32" (24h) or "2:32 PM"; absent or blank means unknown
    #[serde(default)]
    pub time: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Display label only
    #[serde(default)]
    pub place_name: String,
}

impl BirthInput {
    /// The birth time if one was given.
    pub fn known_time(&self) -> Option<&str> {
        self.time.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

// Rounding must not carry a degree into the next sign
const MAX_DISPLAY_DEGREE: f64 = 29.99;

/// Where one body or angle sits in the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: Sign,
    /// Degree within sign, 2 decimals
    pub degree: f64,
    /// Ecliptic longitude, 4 decimals
    pub longitude: f64,
    /// Planets only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    /// Planets only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrograde: Option<bool>,
}

impl Placement {
    pub fn for_planet(position: &CelestialPosition, houses: &HouseSystem) -> Self {
        Self {
            house: Some(houses.house_of(position.lon)),
            retrograde: Some(position.retrograde),
            ..Self::for_point(position)
        }
    }

    pub fn for_point(position: &CelestialPosition) -> Self {
        Self {
            sign: Sign::from_longitude(position.lon),
            degree: round_to(degree_within_sign(position.lon), 2).min(MAX_DISPLAY_DEGREE),
            longitude: round_to(position.lon, 4),
            house: None,
            retrograde: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCuspPlacement {
    pub house: u8,
    pub sign: Sign,
    pub degree: f64,
    pub longitude: f64,
}

impl From<&HouseCusp> for HouseCuspPlacement {
    fn from(cusp: &HouseCusp) -> Self {
        Self {
            house: cusp.house,
            sign: cusp.sign(),
            degree: cusp.degree(),
            longitude: cusp.longitude,
        }
    }
}

/// Serializable chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub planets: BTreeMap<ChartObject, Placement>,
    pub points: BTreeMap<ChartObject, Placement>,
    pub houses: Vec<HouseCuspPlacement>,
    pub timezone: String,
    pub utc_datetime: DateTime<Utc>,
    pub accuracy: Accuracy,
}

impl ChartResult {
    /// Placement of a planet or point, whichever map holds it.
    pub fn placement(&self, object: ChartObject) -> Option<&Placement> {
        self.planets.get(&object).or_else(|| self.points.get(&object))
    }

    /// Cusps in house order, for house lookups on a re-parsed chart.
    pub fn house_cusps(&self) -> Vec<HouseCusp> {
        self.houses
            .iter()
            .map(|h| HouseCusp {
                house: h.house,
                longitude: h.longitude,
            })
            .collect()
    }
}

/// An object left out of the chart because its lookup failed.
#[derive(Debug)]
pub struct Omission {
    pub object: ChartObject,
    pub error: EphemerisError,
}

/// A computed chart together with the raw positions it was built from.
#[derive(Debug)]
pub struct NatalChart {
    pub result: ChartResult,
    /// Unrounded provider output for every object that resolved
    pub positions: Vec<CelestialPosition>,
    pub houses: HouseSystem,
    pub omitted: Vec<Omission>,
}

impl NatalChart {
    pub fn position(&self, object: ChartObject) -> Option<&CelestialPosition> {
        self.positions.iter().find(|p| p.object == object)
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(327.123456, 4), 327.1235);
        assert_eq!(round_to(27.125001, 2), 27.13);
    }

    #[test]
    fn test_point_has_no_house() {
        let pos = CelestialPosition {
            object: ChartObject::Midheaven,
            lon: 275.55556,
            lat: 0.0,
            speed_lon: 0.0,
            retrograde: false,
        };
        let p = Placement::for_point(&pos);
        assert_eq!(p.sign, Sign::Capricorn);
        assert_eq!(p.degree, 5.56);
        assert_eq!(p.longitude, 275.5556);
        assert_eq!(p.house, None);
        assert_eq!(p.retrograde, None);
    }

    #[test]
    fn test_degree_stays_inside_sign() {
        let pos = CelestialPosition {
            object: ChartObject::Venus,
            lon: 29.999,
            lat: 0.0,
            speed_lon: 1.0,
            retrograde: false,
        };
        let p = Placement::for_point(&pos);
        assert_eq!(p.sign, Sign::Aries);
        assert_eq!(p.degree, 29.99);
        assert_eq!(p.longitude, 29.999);
    }

    #[test]
    fn test_known_time() {
        let mut input = BirthInput {
            date: "1992-02-17".to_string(),
            time: Some("  ".to_string()),
            latitude: 0.0,
            longitude: 0.0,
            place_name: String::new(),
        };
        assert_eq!(input.known_time(), None);
        input.time = Some(" 14:32 ".to_string());
        assert_eq!(input.known_time(), Some("14:32"));
    }
}

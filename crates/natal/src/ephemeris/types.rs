use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// A body or calculated angle the chart asks the ephemeris about.
///
/// Declaration order is the fixed chart order; it drives map ordering and the
/// pair iteration of aspect detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartObject {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(rename = "asc")]
    Ascendant,
    #[serde(rename = "mc")]
    Midheaven,
}

impl ChartObject {
    /// The ten planets placed in signs and houses.
    pub const PLANETS: [ChartObject; 10] = [
        ChartObject::Sun,
        ChartObject::Moon,
        ChartObject::Mercury,
        ChartObject::Venus,
        ChartObject::Mars,
        ChartObject::Jupiter,
        ChartObject::Saturn,
        ChartObject::Uranus,
        ChartObject::Neptune,
        ChartObject::Pluto,
    ];

    /// Calculated angles. These have no house and no retrograde state.
    pub const POINTS: [ChartObject; 2] = [ChartObject::Ascendant, ChartObject::Midheaven];

    pub fn is_point(self) -> bool {
        matches!(self, ChartObject::Ascendant | ChartObject::Midheaven)
    }

    /// Display name, e.g. "Sun" or "Ascendant".
    pub fn label(self) -> &'static str {
        match self {
            ChartObject::Sun => "Sun",
            ChartObject::Moon => "Moon",
            ChartObject::Mercury => "Mercury",
            ChartObject::Venus => "Venus",
            ChartObject::Mars => "Mars",
            ChartObject::Jupiter => "Jupiter",
            ChartObject::Saturn => "Saturn",
            ChartObject::Uranus => "Uranus",
            ChartObject::Neptune => "Neptune",
            ChartObject::Pluto => "Pluto",
            ChartObject::Ascendant => "Ascendant",
            ChartObject::Midheaven => "Midheaven",
        }
    }

    /// Serialized key, e.g. "sun" or "asc".
    pub fn key(self) -> &'static str {
        match self {
            ChartObject::Ascendant => "asc",
            ChartObject::Midheaven => "mc",
            ChartObject::Sun => "sun",
            ChartObject::Moon => "moon",
            ChartObject::Mercury => "mercury",
            ChartObject::Venus => "venus",
            ChartObject::Mars => "mars",
            ChartObject::Jupiter => "jupiter",
            ChartObject::Saturn => "saturn",
            ChartObject::Uranus => "uranus",
            ChartObject::Neptune => "neptune",
            ChartObject::Pluto => "pluto",
        }
    }
}

impl fmt::Display for ChartObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of one body or angle at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub object: ChartObject,
    /// Ecliptic longitude in degrees (0-360)
    pub lon: f64,
    /// Ecliptic latitude in degrees
    #[serde(default)]
    pub lat: f64,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed_lon: f64,
    /// Always false for angles
    #[serde(default)]
    pub retrograde: bool,
}

/// Start-up configuration for the Swiss Ephemeris adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisConfig {
    /// Directory holding the Swiss Ephemeris `.se1` data files
    pub path: PathBuf,
    /// First calendar year covered by the installed data files
    pub min_year: i32,
    /// Last calendar year covered by the installed data files
    pub max_year: i32,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./se"),
            min_year: 1800,
            max_year: 2399,
        }
    }
}

use crate::ephemeris::gateway::{EphemerisError, EphemerisGateway};
use crate::ephemeris::types::{CelestialPosition, ChartObject, EphemerisConfig, GeoLocation};
use crate::western::signs::normalize_degrees;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};
use swisseph::{AscMc, Cusp};

// Swiss Ephemeris body numbers (SE_SUN .. SE_PLUTO)
const PLANET_IDS: &[(ChartObject, i32)] = &[
    (ChartObject::Sun, 0),
    (ChartObject::Moon, 1),
    (ChartObject::Mercury, 2),
    (ChartObject::Venus, 3),
    (ChartObject::Mars, 4),
    (ChartObject::Jupiter, 5),
    (ChartObject::Saturn, 6),
    (ChartObject::Uranus, 7),
    (ChartObject::Neptune, 8),
    (ChartObject::Pluto, 9),
];

const PLACIDUS: u8 = b'P';

// FLG_SWIEPH | FLG_SPEED
const FLAGS: i32 = 2 | 256;

// GREG_CAL
const GREGORIAN: u32 = 1;

/// Swiss Ephemeris backed [`EphemerisGateway`].
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    min_year: i32,
    max_year: i32,
}

impl SwissEphemerisAdapter {
    /// Create an adapter from explicit start-up configuration.
    pub fn new(config: &EphemerisConfig) -> Result<Self, EphemerisError> {
        if !config.path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: config.path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        set_ephe_path(&config.path.to_string_lossy());
        log::debug!(
            "Swiss Ephemeris data at {} (years {}..={})",
            config.path.display(),
            config.min_year,
            config.max_year
        );

        Ok(Self {
            ephemeris_path: config.path.clone(),
            min_year: config.min_year,
            max_year: config.max_year,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn check_range(&self, dt_utc: DateTime<Utc>) -> Result<(), EphemerisError> {
        let year = dt_utc.year();
        if year < self.min_year || year > self.max_year {
            return Err(EphemerisError::OutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }

    fn calc_planet_position(
        &self,
        object: ChartObject,
        dt_utc: DateTime<Utc>,
    ) -> Result<CelestialPosition, EphemerisError> {
        let planet_code = PLANET_IDS
            .iter()
            .find(|(id, _)| *id == object)
            .map(|(_, code)| *code)
            .ok_or(EphemerisError::UnsupportedObject { object })?;

        let jd = datetime_to_julian_day(dt_utc);
        let result = calc_ut(jd, planet_code as u32, FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                object,
                datetime: dt_utc,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        let speed_lon = out[3];
        Ok(CelestialPosition {
            object,
            lon: normalize_degrees(out[0]),
            lat: out[1],
            speed_lon,
            retrograde: speed_lon < 0.0,
        })
    }

    fn calc_houses(&self, dt_utc: DateTime<Utc>, location: GeoLocation) -> (Cusp, AscMc) {
        let jd = datetime_to_julian_day(dt_utc);
        let (c, a) = houses_ex(jd, FLAGS, location.lat, location.lon, PLACIDUS as i32);
        (Cusp::from_array(c), AscMc::from_array(a))
    }
}

impl EphemerisGateway for SwissEphemerisAdapter {
    fn position_of(
        &self,
        object: ChartObject,
        dt_utc: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<CelestialPosition, EphemerisError> {
        self.check_range(dt_utc)?;

        if !object.is_point() {
            return self.calc_planet_position(object, dt_utc);
        }

        let (_, ascmc) = self.calc_houses(dt_utc, location);
        let raw = match object {
            ChartObject::Ascendant => ascmc.ascendant,
            _ => ascmc.mc,
        };
        if !raw.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                object,
                datetime: dt_utc,
                message: "angle is undefined at this latitude".to_string(),
            });
        }

        Ok(CelestialPosition {
            object,
            lon: normalize_degrees(raw),
            lat: 0.0,
            speed_lon: 0.0,
            retrograde: false,
        })
    }

    fn house_cusps(
        &self,
        dt_utc: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        self.check_range(dt_utc).map_err(|e| EphemerisError::HouseCalculationFailed {
            message: e.to_string(),
        })?;

        let (cusps, _) = self.calc_houses(dt_utc, location);
        let values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];

        // Placidus is undefined inside the polar circles
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "Placidus cusps undefined at latitude {:.4}",
                    location.lat
                ),
            });
        }

        Ok(values.map(normalize_degrees))
    }
}

/// Convert UTC datetime to Julian Day (UT)
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal = dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + dt.second() as f64 / 3600.0
        + dt.nanosecond() as f64 / 3_600_000_000_000.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREGORIAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_rejected() {
        let config = EphemerisConfig {
            path: PathBuf::from("/definitely/not/a/swisseph/dir"),
            ..EphemerisConfig::default()
        };
        let err = SwissEphemerisAdapter::new(&config).err();
        assert!(matches!(err, Some(EphemerisError::FileNotFound { .. })));
    }

    #[test]
    fn test_existing_path_is_kept() {
        let dir = std::env::temp_dir();
        let config = EphemerisConfig {
            path: dir.clone(),
            ..EphemerisConfig::default()
        };
        let adapter = SwissEphemerisAdapter::new(&config).unwrap();
        assert_eq!(adapter.ephemeris_path(), dir.as_path());
    }

    #[test]
    fn test_julian_day_j2000() {
        use chrono::TimeZone;
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((datetime_to_julian_day(dt) - 2_451_545.0).abs() < 1e-6);
    }
}

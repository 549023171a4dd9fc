use crate::ephemeris::types::{CelestialPosition, ChartObject, GeoLocation};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during ephemeris lookups
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("{object} is not supported by this ephemeris provider")]
    UnsupportedObject { object: ChartObject },
    #[error("Year {year} is outside the ephemeris range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },
    #[error("Failed to calculate position for {object} at {datetime}: {message}")]
    CalculationFailed {
        object: ChartObject,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of ecliptic positions for a UTC instant and an observer location.
///
/// Longitudes are returned in the [0, 360) convention measured from the
/// vernal equinox. Implementations must be stateless per call so one gateway
/// can serve concurrent charts.
pub trait EphemerisGateway {
    fn position_of(
        &self,
        object: ChartObject,
        dt_utc: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<CelestialPosition, EphemerisError>;

    /// Placidus cusp longitudes for houses 1..=12, in house order.
    fn house_cusps(
        &self,
        dt_utc: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<[f64; 12], EphemerisError>;
}

impl<G: EphemerisGateway + ?Sized> EphemerisGateway for &G {
    fn position_of(
        &self,
        object: ChartObject,
        dt_utc: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<CelestialPosition, EphemerisError> {
        (**self).position_of(object, dt_utc, location)
    }

    fn house_cusps(
        &self,
        dt_utc: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        (**self).house_cusps(dt_utc, location)
    }
}

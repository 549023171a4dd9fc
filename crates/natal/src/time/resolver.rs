use crate::time::lookup::TimezoneLookup;
use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%I:%M %p",
    "%I:%M%p",
    "%I:%M:%S %p",
];

/// Errors turning a local birth date/time into a UTC instant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Could not parse {field} {input:?}")]
    TimeParse { field: &'static str, input: String },
    #[error("Could not resolve timezone from coordinates ({latitude}, {longitude})")]
    TimezoneResolution { latitude: f64, longitude: f64 },
    #[error("Unknown IANA timezone {name:?}")]
    UnknownTimezone { name: String },
}

/// Confidence in the birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    /// Explicit birth time given
    High,
    /// Birth time unknown, local noon assumed
    Medium,
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accuracy::High => f.write_str("high"),
            Accuracy::Medium => f.write_str("medium"),
        }
    }
}

/// An unambiguous birth instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInstant {
    pub utc: DateTime<Utc>,
    /// Wall-clock time that was localized
    pub local: NaiveDateTime,
    /// IANA name, e.g. "America/New_York"
    pub timezone: String,
    pub accuracy: Accuracy,
}

/// Resolves local birth time against the timezone at the birth place.
pub struct TimeResolver<L> {
    lookup: L,
}

impl<L: TimezoneLookup> TimeResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn resolve(
        &self,
        date: &str,
        time: Option<&str>,
        lat: f64,
        lon: f64,
    ) -> Result<ResolvedInstant, TimeError> {
        let time = time.map(str::trim).filter(|t| !t.is_empty());
        let accuracy = if time.is_some() {
            Accuracy::High
        } else {
            Accuracy::Medium
        };

        let local = NaiveDateTime::new(
            parse_date(date)?,
            match time {
                Some(t) => parse_time(t)?,
                None => noon(),
            },
        );

        let timezone = self
            .lookup
            .timezone_at(lat, lon)
            .ok_or(TimeError::TimezoneResolution {
                latitude: lat,
                longitude: lon,
            })?;
        let tz: Tz = timezone
            .parse()
            .map_err(|_| TimeError::UnknownTimezone {
                name: timezone.clone(),
            })?;

        let utc = localize(tz, local);
        log::debug!("{local} in {timezone} resolved to {utc} ({accuracy} accuracy)");

        Ok(ResolvedInstant {
            utc,
            local,
            timezone,
            accuracy,
        })
    }
}

/// Convert a wall-clock time in `tz` to UTC.
///
/// A repeated wall-clock time (clocks set back) takes the standard-time
/// reading. A skipped wall-clock time (clocks set forward) is read with the
/// offset in force before the transition, which lands it one gap later.
pub fn localize(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, latest) => {
            log::debug!("{local} is ambiguous in {tz}; taking standard time");
            [earliest, latest]
                .into_iter()
                .find(|dt| dt.offset().dst_offset() == Duration::zero())
                .unwrap_or(latest)
                .with_timezone(&Utc)
        }
        LocalResult::None => {
            let before = local - Duration::days(1);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = local - Duration::seconds(offset.local_minus_utc() as i64);
            log::debug!("{local} does not exist in {tz}; shifted past the gap");
            Utc.from_utc_datetime(&utc)
        }
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TimeError> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError::TimeParse {
            field: "date",
            input: input.to_string(),
        })
}

pub fn parse_time(input: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError::TimeParse {
            field: "time",
            input: input.to_string(),
        })
}

fn noon() -> NaiveTime {
    NaiveTime::MIN + Duration::hours(12)
}

use chrono::{TimeZone, Utc};
use natal::time::{Accuracy, TimeError, TimeResolver, TzfLookup};

#[test]
fn test_new_york_explicit_time() {
    let resolver = TimeResolver::new(TzfLookup::new());
    let r = resolver
        .resolve("1992-02-17", Some("14:32"), 40.7128, -74.0060)
        .unwrap();
    assert_eq!(r.timezone, "America/New_York");
    assert_eq!(r.utc, Utc.with_ymd_and_hms(1992, 2, 17, 19, 32, 0).unwrap());
    assert_eq!(r.accuracy, Accuracy::High);
}

#[test]
fn test_new_york_unknown_time() {
    let resolver = TimeResolver::new(TzfLookup::new());
    let r = resolver
        .resolve("1992-02-17", Some(""), 40.7128, -74.0060)
        .unwrap();
    assert_eq!(r.utc, Utc.with_ymd_and_hms(1992, 2, 17, 17, 0, 0).unwrap());
    assert_eq!(r.accuracy, Accuracy::Medium);
}

#[test]
fn test_london_summer_time() {
    let resolver = TimeResolver::new(TzfLookup::new());
    let r = resolver
        .resolve("1985-07-13", Some("3:00 PM"), 51.5074, -0.1278)
        .unwrap();
    assert_eq!(r.timezone, "Europe/London");
    assert_eq!(r.utc, Utc.with_ymd_and_hms(1985, 7, 13, 14, 0, 0).unwrap());
}

#[test]
fn test_invalid_coordinates() {
    let resolver = TimeResolver::new(TzfLookup::new());
    let err = resolver
        .resolve("1992-02-17", Some("14:32"), 123.0, 500.0)
        .unwrap_err();
    assert!(matches!(err, TimeError::TimezoneResolution { .. }));
}

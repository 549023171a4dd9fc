use natal::ephemeris::{CelestialPosition, ChartObject, TableEphemeris};
use natal::time::{Accuracy, FixedTimezone};
use natal::western::{house_of, HouseSystem, Sign};
use natal::{BirthInput, ChartAssembler, ChartError, ChartResult, NatalService, Operation};

const NEW_YORK_CUSPS: [f64; 12] = [
    110.2, 133.9, 158.4, 186.7, 220.1, 255.8, 290.2, 313.9, 338.4, 6.7, 40.1, 75.8,
];

fn new_york_table() -> TableEphemeris {
    TableEphemeris::new()
        .with_longitude(ChartObject::Sun, 328.1234567)
        .with_longitude(ChartObject::Moon, 148.3)
        .with_longitude(ChartObject::Mercury, 310.9)
        .with_longitude(ChartObject::Venus, 298.2)
        .with_longitude(ChartObject::Mars, 291.0)
        .with_position(CelestialPosition {
            object: ChartObject::Jupiter,
            lon: 160.4,
            lat: 1.2,
            speed_lon: -0.1,
            retrograde: true,
        })
        .with_longitude(ChartObject::Saturn, 305.6)
        .with_longitude(ChartObject::Uranus, 286.1)
        .with_longitude(ChartObject::Neptune, 288.0)
        .with_longitude(ChartObject::Pluto, 232.9)
        .with_longitude(ChartObject::Ascendant, 110.2)
        .with_longitude(ChartObject::Midheaven, 6.7)
        .with_cusps(NEW_YORK_CUSPS)
}

fn input(time: Option<&str>) -> BirthInput {
    BirthInput {
        date: "1992-02-17".to_string(),
        time: time.map(str::to_string),
        latitude: 40.7128,
        longitude: -74.0060,
        place_name: "New York".to_string(),
    }
}

fn assembler() -> ChartAssembler<TableEphemeris, FixedTimezone> {
    ChartAssembler::new(new_york_table(), FixedTimezone("America/New_York".to_string()))
}

#[test]
fn test_full_chart() {
    let chart = assembler().assemble(&input(Some("14:32"))).unwrap();
    let result = &chart.result;

    assert_eq!(result.planets.len(), 10);
    assert_eq!(result.points.len(), 2);
    assert_eq!(result.houses.len(), 12);
    assert!(chart.omitted.is_empty());
    assert_eq!(result.timezone, "America/New_York");
    assert_eq!(result.utc_datetime.to_rfc3339(), "1992-02-17T19:32:00+00:00");
    assert_eq!(result.accuracy, Accuracy::High);

    let sun = &result.planets[&ChartObject::Sun];
    assert_eq!(sun.sign, Sign::Aquarius);
    assert_eq!(sun.longitude, 328.1235);
    assert_eq!(sun.degree, 28.12);
    assert_eq!(sun.house, Some(8));
    assert_eq!(sun.retrograde, Some(false));

    let jupiter = &result.planets[&ChartObject::Jupiter];
    assert_eq!(jupiter.retrograde, Some(true));
    assert_eq!(jupiter.house, Some(3));

    let asc = &result.points[&ChartObject::Ascendant];
    assert_eq!(asc.sign, Sign::Cancer);
    assert_eq!(asc.house, None);
    assert_eq!(asc.retrograde, None);

    let tenth = &result.houses[9];
    assert_eq!(tenth.house, 10);
    assert_eq!(tenth.sign, Sign::Aries);
    assert_eq!(tenth.longitude, 6.7);

    assert_eq!(result.placement(ChartObject::Sun), Some(sun));
    let mc = result.placement(ChartObject::Midheaven).unwrap();
    assert_eq!(mc.sign, Sign::Aries);
    assert_eq!(mc.house, None);
}

#[test]
fn test_unknown_time_is_medium_accuracy_noon() {
    let chart = assembler().assemble(&input(Some(""))).unwrap();
    assert_eq!(chart.result.accuracy, Accuracy::Medium);
    assert_eq!(chart.result.utc_datetime.to_rfc3339(), "1992-02-17T17:00:00+00:00");

    let chart = assembler().assemble(&input(None)).unwrap();
    assert_eq!(chart.result.accuracy, Accuracy::Medium);
}

#[test]
fn test_unresolvable_timezone_is_fatal() {
    struct Nowhere;
    impl natal::time::TimezoneLookup for Nowhere {
        fn timezone_at(&self, _lat: f64, _lon: f64) -> Option<String> {
            None
        }
    }

    let service = NatalService::new(new_york_table(), Nowhere);
    let err = service.chart(&input(Some("14:32"))).unwrap_err();
    assert_eq!(err.operation, Operation::Chart);
    assert!(matches!(err.source, ChartError::Time(_)));
    assert!(err.to_string().starts_with("Chart calculation failed: "));
}

#[test]
fn test_unparsable_time_is_fatal() {
    let service = NatalService::new(new_york_table(), FixedTimezone("America/New_York".into()));
    let err = service.report(&input(Some("half past two"))).unwrap_err();
    assert_eq!(err.operation, Operation::Report);
    assert!(err.to_string().contains("half past two"));
}

#[test]
fn test_round_trip_preserves_placements() {
    let result = assembler().assemble(&input(Some("14:32"))).unwrap().result;
    let json = serde_json::to_string(&result).unwrap();
    let parsed: ChartResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);

    // Houses recomputed from the re-parsed cusps agree with the stored ones
    let cusps = parsed.house_cusps();
    for (object, placement) in &parsed.planets {
        let raw = new_york_table_longitude(*object);
        assert_eq!(Some(house_of(raw, &cusps)), placement.house, "{object}");
    }
}

#[test]
fn test_serialized_shape() {
    let result = assembler().assemble(&input(Some("14:32"))).unwrap().result;
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["planets"]["sun"]["sign"], "aquarius");
    assert_eq!(value["planets"]["sun"]["house"], 8);
    assert_eq!(value["points"]["asc"]["sign"], "cancer");
    assert!(value["points"]["mc"].get("house").is_none());
    assert_eq!(value["houses"].as_array().unwrap().len(), 12);
    assert_eq!(value["accuracy"], "high");
    assert_eq!(value["timezone"], "America/New_York");
}

#[test]
fn test_house_partition_is_exhaustive() {
    let houses = HouseSystem::from_longitudes(NEW_YORK_CUSPS);
    let cusps = houses.cusps();
    for step in 0..3600 {
        let lon = step as f64 * 0.1;
        let matches = (0..12)
            .filter(|&i| {
                natal::western::houses::in_house_interval(
                    lon,
                    cusps[i].longitude,
                    cusps[(i + 1) % 12].longitude,
                )
            })
            .count();
        assert_eq!(matches, 1, "longitude {lon} matched {matches} houses");
    }
}

#[test]
fn test_evenly_spaced_wrap_house() {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = i as f64 * 30.0;
    }
    let houses = HouseSystem::from_longitudes(cusps);
    assert_eq!(houses.house_of(359.0), 12);
}

fn new_york_table_longitude(object: ChartObject) -> f64 {
    match object {
        ChartObject::Sun => 328.1234567,
        ChartObject::Moon => 148.3,
        ChartObject::Mercury => 310.9,
        ChartObject::Venus => 298.2,
        ChartObject::Mars => 291.0,
        ChartObject::Jupiter => 160.4,
        ChartObject::Saturn => 305.6,
        ChartObject::Uranus => 286.1,
        ChartObject::Neptune => 288.0,
        ChartObject::Pluto => 232.9,
        ChartObject::Ascendant => 110.2,
        ChartObject::Midheaven => 6.7,
    }
}

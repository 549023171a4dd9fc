use tzf_rs::DefaultFinder;

/// Maps coordinates to an IANA timezone name.
pub trait TimezoneLookup {
    /// `None` when no timezone covers the coordinates.
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String>;
}

impl<T: TimezoneLookup + ?Sized> TimezoneLookup for &T {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String> {
        (**self).timezone_at(lat, lon)
    }
}

/// Polygon based lookup backed by the bundled `tzf-rs` dataset.
pub struct TzfLookup {
    finder: DefaultFinder,
}

impl TzfLookup {
    /// Loads the polygon data; build once and share.
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfLookup {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        let name = self.finder.get_tz_name(lon, lat);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// Always answers with the same zone. Handy when the zone is already known.
#[derive(Debug, Clone)]
pub struct FixedTimezone(pub String);

impl TimezoneLookup for FixedTimezone {
    fn timezone_at(&self, _lat: f64, _lon: f64) -> Option<String> {
        Some(self.0.clone())
    }
}

//! House cusps and house membership.
//!
//! Cusps arrive in house order but not necessarily in increasing longitude:
//! exactly one house interval crosses the 0°/360° seam. Membership is tested
//! as a circular interval `[start, end)` so unevenly spaced (Placidus) cusps
//! work the same as equal houses.

use crate::western::signs::{degree_within_sign, normalize_degrees, Sign};
use serde::{Deserialize, Serialize};

/// House assigned when no complete cusp set is available.
pub const FALLBACK_HOUSE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: u8, // 1..=12
    pub longitude: f64,
}

impl HouseCusp {
    pub fn sign(&self) -> Sign {
        Sign::from_longitude(self.longitude)
    }

    pub fn degree(&self) -> f64 {
        degree_within_sign(self.longitude)
    }
}

/// The twelve cusps of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseSystem {
    cusps: Vec<HouseCusp>,
}

impl HouseSystem {
    pub fn from_longitudes(longitudes: [f64; 12]) -> Self {
        let cusps = longitudes
            .iter()
            .enumerate()
            .map(|(i, lon)| HouseCusp {
                house: (i + 1) as u8,
                longitude: normalize_degrees(*lon),
            })
            .collect();
        Self { cusps }
    }

    pub fn cusps(&self) -> &[HouseCusp] {
        &self.cusps
    }

    pub fn house_of(&self, longitude: f64) -> u8 {
        house_of(longitude, &self.cusps)
    }
}

/// True when `longitude` lies in the circular interval `[start, end)`.
pub fn in_house_interval(longitude: f64, start: f64, end: f64) -> bool {
    if end > start {
        start <= longitude && longitude < end
    } else {
        longitude >= start || longitude < end
    }
}

/// House number (1..=12) containing `longitude`.
///
/// Fewer than twelve cusps means the house computation failed upstream; every
/// body is then placed in house 1 rather than failing the chart.
pub fn house_of(longitude: f64, cusps: &[HouseCusp]) -> u8 {
    if cusps.len() < 12 {
        return FALLBACK_HOUSE;
    }

    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i].longitude;
        let end = cusps[(i + 1) % 12].longitude;
        if in_house_interval(lon, start, end) {
            return cusps[i].house;
        }
    }

    // Only reachable for degenerate cusp sets (e.g. all equal)
    FALLBACK_HOUSE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_houses(offset: f64) -> HouseSystem {
        let mut lons = [0.0; 12];
        for (i, lon) in lons.iter_mut().enumerate() {
            *lon = offset + i as f64 * 30.0;
        }
        HouseSystem::from_longitudes(lons)
    }

    #[test]
    fn test_equal_houses_wrap_case() {
        let houses = equal_houses(0.0);
        assert_eq!(houses.house_of(0.0), 1);
        assert_eq!(houses.house_of(29.99), 1);
        assert_eq!(houses.house_of(30.0), 2);
        assert_eq!(houses.house_of(359.0), 12);
    }

    #[test]
    fn test_cusp_normalization() {
        let houses = equal_houses(200.0);
        // House 6 starts at 350°, house 7 at 380° = 20°
        assert_eq!(houses.cusps()[6].longitude, 20.0);
        assert_eq!(houses.house_of(355.0), 6);
        assert_eq!(houses.house_of(5.0), 6);
        assert_eq!(houses.house_of(20.0), 7);
    }

    #[test]
    fn test_fallback_when_cusps_missing() {
        assert_eq!(house_of(123.0, &[]), FALLBACK_HOUSE);
        let partial: Vec<HouseCusp> = equal_houses(0.0).cusps()[..11].to_vec();
        assert_eq!(house_of(200.0, &partial), FALLBACK_HOUSE);
    }

    #[test]
    fn test_cusp_sign_and_degree() {
        let cusp = HouseCusp { house: 10, longitude: 275.5 };
        assert_eq!(cusp.sign(), Sign::Capricorn);
        assert!((cusp.degree() - 5.5).abs() < 1e-9);
    }
}

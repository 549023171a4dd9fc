use crate::chart::data::{BirthInput, ChartResult, HouseCuspPlacement, NatalChart, Omission, Placement};
use crate::ephemeris::{ChartObject, EphemerisGateway, GeoLocation};
use crate::error::ChartError;
use crate::time::{TimeResolver, TimezoneLookup};
use crate::western::HouseSystem;
use std::collections::BTreeMap;

/// Builds a natal chart from birth data.
///
/// Holds no per-request state; one assembler can serve any number of charts.
pub struct ChartAssembler<E, L> {
    ephemeris: E,
    resolver: TimeResolver<L>,
}

impl<E: EphemerisGateway, L: TimezoneLookup> ChartAssembler<E, L> {
    pub fn new(ephemeris: E, lookup: L) -> Self {
        Self {
            ephemeris,
            resolver: TimeResolver::new(lookup),
        }
    }

    /// Resolve the birth instant, fetch cusps and positions, and place every
    /// object.
    ///
    /// Time resolution and cusp failures abort the chart. A failed lookup for
    /// a single planet or angle only drops that object; it is logged and kept
    /// in [`NatalChart::omitted`].
    pub fn assemble(&self, input: &BirthInput) -> Result<NatalChart, ChartError> {
        let instant = self.resolver.resolve(
            &input.date,
            input.known_time(),
            input.latitude,
            input.longitude,
        )?;
        let location = GeoLocation {
            lat: input.latitude,
            lon: input.longitude,
        };

        let cusps = self
            .ephemeris
            .house_cusps(instant.utc, location)
            .map_err(ChartError::Houses)?;
        let houses = HouseSystem::from_longitudes(cusps);

        let mut positions = Vec::new();
        let mut omitted = Vec::new();
        let mut planets = BTreeMap::new();
        let mut points = BTreeMap::new();

        for object in ChartObject::PLANETS.into_iter().chain(ChartObject::POINTS) {
            let position = match self.ephemeris.position_of(object, instant.utc, location) {
                Ok(position) => position,
                Err(error) => {
                    log::warn!("Omitting {object} from chart: {error}");
                    omitted.push(Omission { object, error });
                    continue;
                }
            };

            if object.is_point() {
                points.insert(object, Placement::for_point(&position));
            } else {
                planets.insert(object, Placement::for_planet(&position, &houses));
            }
            positions.push(position);
        }

        let result = ChartResult {
            planets,
            points,
            houses: houses.cusps().iter().map(HouseCuspPlacement::from).collect(),
            timezone: instant.timezone,
            utc_datetime: instant.utc,
            accuracy: instant.accuracy,
        };

        Ok(NatalChart {
            result,
            positions,
            houses,
            omitted,
        })
    }
}

pub mod adapter;
pub mod gateway;
pub mod table;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use gateway::{EphemerisError, EphemerisGateway};
pub use table::TableEphemeris;
pub use types::{CelestialPosition, ChartObject, EphemerisConfig, GeoLocation};

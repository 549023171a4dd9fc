pub mod houses;
pub mod signs;

pub use houses::{house_of, HouseCusp, HouseSystem, FALLBACK_HOUSE};
pub use signs::{degree_within_sign, get_sign_index, normalize_degrees, Sign};

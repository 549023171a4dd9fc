pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, AspectCalculator, ASPECT_BODIES};
pub use types::{Aspect, AspectKind};

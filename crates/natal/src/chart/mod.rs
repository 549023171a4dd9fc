pub mod assembler;
pub mod data;

pub use assembler::ChartAssembler;
pub use data::{BirthInput, ChartResult, HouseCuspPlacement, NatalChart, Omission, Placement};

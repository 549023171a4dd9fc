pub mod renderer;

pub use renderer::{ChartReport, ReportRenderer, BIG_SIX};

pub mod lookup;
pub mod resolver;

pub use lookup::{FixedTimezone, TimezoneLookup, TzfLookup};
pub use resolver::{localize, Accuracy, ResolvedInstant, TimeError, TimeResolver};

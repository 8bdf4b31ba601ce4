pub mod events;
pub mod population;
pub mod stats;
pub mod transmission;

pub use events::{BehaviorEvent, EventKind};
pub use population::Population;
pub use stats::{EpidemicStats, StatusCounts};
pub use transmission::ProximityMode;

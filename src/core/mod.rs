pub mod config;
pub mod error;
pub mod types;

pub use config::PopulationConfig;
pub use error::{Result, SimError};
pub use types::{Area, Tick, Vec2};

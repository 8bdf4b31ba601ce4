use thiserror::Error;

use crate::health::HealthState;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("population must contain at least one agent")]
    EmptyPopulation,

    #[error("initially infected ({infected}) exceeds population size ({total})")]
    InfectedExceedsPopulation { infected: usize, total: usize },

    #[error("agent radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("area {width}x{height} cannot contain an agent of radius {radius}")]
    DegenerateArea { width: f32, height: f32, radius: f32 },

    #[error("invalid age range [{min}, {max}]")]
    InvalidAgeRange { min: f32, max: f32 },

    #[error("base speed for {state:?} must be a non-negative finite number, got {speed}")]
    NegativeSpeed { state: HealthState, speed: f32 },
}

pub type Result<T> = std::result::Result<T, SimError>;

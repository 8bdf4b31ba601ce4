//! Caller-supplied population parameters
//!
//! The settings document itself is owned by an external configuration layer;
//! this crate only defines the parameter shape and validates it at
//! construction time. Values are never silently clamped.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::Area;

/// Parameters for building a [`Population`](crate::simulation::Population)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of agents created, fixed for the life of the population
    pub total_agents: usize,
    /// How many of them start in the Infected state
    pub initially_infected: usize,
    /// Contact radius shared by every agent (world units)
    pub agent_radius: f32,
    /// Ages are drawn uniformly from this inclusive range
    pub age_range: (f32, f32),
}

impl PopulationConfig {
    /// Validate against the area the population will inhabit
    pub fn validate(&self, area: &Area) -> Result<()> {
        if self.total_agents == 0 {
            return Err(SimError::EmptyPopulation);
        }
        if self.initially_infected > self.total_agents {
            return Err(SimError::InfectedExceedsPopulation {
                infected: self.initially_infected,
                total: self.total_agents,
            });
        }
        if !self.agent_radius.is_finite() || self.agent_radius <= 0.0 {
            return Err(SimError::NonPositiveRadius(self.agent_radius));
        }
        if area.width <= 2.0 * self.agent_radius || area.height <= 2.0 * self.agent_radius {
            return Err(SimError::DegenerateArea {
                width: area.width,
                height: area.height,
                radius: self.agent_radius,
            });
        }
        let (min, max) = self.age_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SimError::InvalidAgeRange { min, max });
        }
        Ok(())
    }
}

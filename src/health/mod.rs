//! Health states and their static parameters
//!
//! The catalog is an explicit immutable value passed into population
//! construction, so simulations with different disease parameters can
//! coexist in one process and be tested in isolation.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::Tick;

/// The four health states an agent can be in
///
/// Transitions are constrained: Healthy -> Infected -> {Recovered, Dead};
/// Recovered and Dead are terminal. No reinfection, no resurrection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthState {
    Healthy,
    Infected,
    Recovered,
    Dead,
}

impl HealthState {
    pub const ALL: [HealthState; 4] = [
        HealthState::Healthy,
        HealthState::Infected,
        HealthState::Recovered,
        HealthState::Dead,
    ];
}

/// Static parameters of one health state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateParams {
    /// Scalar multiplier applied to an agent's velocity while in this state
    pub base_speed: f32,
    /// Ticks before a transition is due; `None` means no limit.
    ///
    /// For Infected this bounds the infection episode; for Dead it marks
    /// removal eligibility (informational only, agents are never removed).
    pub duration_limit: Option<Tick>,
}

/// Immutable per-state parameter table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStateCatalog {
    params: [StateParams; 4],
}

impl HealthStateCatalog {
    /// Build a catalog from parameters ordered as [`HealthState::ALL`]
    pub fn new(params: [StateParams; 4]) -> Result<Self> {
        for (state, p) in HealthState::ALL.iter().zip(params.iter()) {
            if !p.base_speed.is_finite() || p.base_speed < 0.0 {
                return Err(SimError::NegativeSpeed {
                    state: *state,
                    speed: p.base_speed,
                });
            }
        }
        Ok(Self { params })
    }

    pub fn params(&self, state: HealthState) -> StateParams {
        self.params[state as usize]
    }

    pub fn base_speed(&self, state: HealthState) -> f32 {
        self.params(state).base_speed
    }

    pub fn duration_limit(&self, state: HealthState) -> Option<Tick> {
        self.params(state).duration_limit
    }
}

impl Default for HealthStateCatalog {
    fn default() -> Self {
        Self {
            params: [
                // Healthy
                StateParams { base_speed: 1.5, duration_limit: None },
                // Infected
                StateParams { base_speed: 1.0, duration_limit: Some(300) },
                // Recovered
                StateParams { base_speed: 1.5, duration_limit: None },
                // Dead
                StateParams { base_speed: 0.0, duration_limit: Some(200) },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_parameters() {
        let catalog = HealthStateCatalog::default();
        assert_eq!(catalog.base_speed(HealthState::Dead), 0.0);
        assert_eq!(catalog.duration_limit(HealthState::Healthy), None);
        assert_eq!(catalog.duration_limit(HealthState::Recovered), None);
        assert_eq!(catalog.duration_limit(HealthState::Infected), Some(300));
        assert_eq!(catalog.duration_limit(HealthState::Dead), Some(200));
    }

    #[test]
    fn test_catalog_rejects_negative_speed() {
        let mut params = HealthStateCatalog::default().params;
        params[HealthState::Infected as usize].base_speed = -1.0;
        assert!(matches!(
            HealthStateCatalog::new(params),
            Err(SimError::NegativeSpeed { state: HealthState::Infected, .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_non_finite_speed() {
        let mut params = HealthStateCatalog::default().params;
        params[0].base_speed = f32::NAN;
        assert!(HealthStateCatalog::new(params).is_err());
    }

    #[test]
    fn test_two_catalogs_coexist() {
        let slow = HealthStateCatalog::new([
            StateParams { base_speed: 0.5, duration_limit: None },
            StateParams { base_speed: 0.5, duration_limit: Some(10) },
            StateParams { base_speed: 0.5, duration_limit: None },
            StateParams { base_speed: 0.0, duration_limit: Some(5) },
        ])
        .unwrap();
        let fast = HealthStateCatalog::default();
        assert_ne!(
            slow.base_speed(HealthState::Healthy),
            fast.base_speed(HealthState::Healthy)
        );
    }
}

//! Aggregate population statistics
//!
//! Both structures are derived views recomputed each tick; neither is an
//! independent source of truth.

use serde::{Deserialize, Serialize};

use crate::entity::Agent;
use crate::health::HealthState;

/// Per-state head count, recomputed by `summarize`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub healthy: usize,
    pub infected: usize,
    pub recovered: usize,
    pub dead: usize,
}

impl StatusCounts {
    pub fn tally(agents: &[Agent]) -> Self {
        let mut counts = Self::default();
        for agent in agents {
            match agent.state {
                HealthState::Healthy => counts.healthy += 1,
                HealthState::Infected => counts.infected += 1,
                HealthState::Recovered => counts.recovered += 1,
                HealthState::Dead => counts.dead += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.recovered + self.dead
    }
}

/// Derived epidemic metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EpidemicStats {
    /// Reproduction-number estimate: mean secondary infections over agents
    /// that have exited the Infected state. `None` while that set is empty -
    /// "no data" is not zero.
    pub mean_secondary_infections: Option<f64>,
}

impl EpidemicStats {
    pub fn compute(agents: &[Agent]) -> Self {
        let exited: Vec<u32> = agents
            .iter()
            .filter(|a| matches!(a.state, HealthState::Recovered | HealthState::Dead))
            .map(|a| a.secondary_infections)
            .collect();
        let mean = if exited.is_empty() {
            None
        } else {
            Some(exited.iter().map(|&n| f64::from(n)).sum::<f64>() / exited.len() as f64)
        };
        Self {
            mean_secondary_infections: mean,
        }
    }
}

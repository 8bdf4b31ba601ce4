//! Transmission resolution over the frozen post-motion snapshot
//!
//! All three strategies answer the same question - which (infected, healthy)
//! contact pairs exist this tick - and must return the identical set for
//! identical positions and radii. Decisions are computed against the frozen
//! snapshot before any of them is applied, so the outcome does not depend on
//! agent iteration order.

use serde::{Deserialize, Serialize};

use crate::entity::Agent;
use crate::health::HealthState;
use crate::spatial::{Quadtree, Rect};

/// How transmission candidates are found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityMode {
    /// Test every ordered pair; reference semantics, O(n^2)
    Exhaustive,
    /// Test healthy agents only against infected agents
    InfectedOnly,
    /// Restrict candidates via the tick's spatial index
    Indexed,
}

/// One resolved transmission: `source` infects `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transmission {
    pub source: usize,
    pub target: usize,
}

fn in_contact(a: &Agent, b: &Agent) -> bool {
    a.position.distance(&b.position) < a.radius + b.radius
}

/// Find every (infected, healthy) contact pair for this tick
///
/// A healthy agent in contact with several infected agents appears once per
/// distinct infector: it is infected once, and each infector is credited.
pub fn find_transmissions(
    agents: &[Agent],
    index: &Quadtree<usize>,
    mode: ProximityMode,
) -> Vec<Transmission> {
    match mode {
        ProximityMode::Exhaustive => exhaustive(agents),
        ProximityMode::InfectedOnly => infected_only(agents),
        ProximityMode::Indexed => indexed(agents, index),
    }
}

fn exhaustive(agents: &[Agent]) -> Vec<Transmission> {
    let mut found = Vec::new();
    for (i, source) in agents.iter().enumerate() {
        if source.state != HealthState::Infected {
            continue;
        }
        for (j, target) in agents.iter().enumerate() {
            if i == j || target.state != HealthState::Healthy {
                continue;
            }
            if in_contact(source, target) {
                found.push(Transmission { source: i, target: j });
            }
        }
    }
    found
}

fn infected_only(agents: &[Agent]) -> Vec<Transmission> {
    let infected: Vec<usize> = agents
        .iter()
        .enumerate()
        .filter(|(_, a)| a.state == HealthState::Infected)
        .map(|(i, _)| i)
        .collect();

    let mut found = Vec::new();
    for &i in &infected {
        for (j, target) in agents.iter().enumerate() {
            if target.state == HealthState::Healthy && in_contact(&agents[i], target) {
                found.push(Transmission { source: i, target: j });
            }
        }
    }
    found
}

fn indexed(agents: &[Agent], index: &Quadtree<usize>) -> Vec<Transmission> {
    // The query window must cover the worst-case contact distance or a pair
    // could fall outside it and the mode would diverge from exhaustive.
    let max_radius = agents.iter().map(|a| a.radius).fold(0.0f32, f32::max);

    let mut found = Vec::new();
    let mut nearby = Vec::new();
    for (i, source) in agents.iter().enumerate() {
        if source.state != HealthState::Infected {
            continue;
        }
        let reach = source.radius + max_radius;
        let window = Rect::new(source.position.x, source.position.y, reach, reach);
        nearby.clear();
        index.query(&window, &mut nearby);

        for point in &nearby {
            let j = point.item;
            if j == i {
                continue;
            }
            let target = &agents[j];
            if target.state == HealthState::Healthy && in_contact(source, target) {
                found.push(Transmission { source: i, target: j });
            }
        }
    }
    found
}

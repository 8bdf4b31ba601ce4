//! The population: agent ownership, the per-tick update loop, aggregation
//!
//! A tick is strictly two-phase. Phase 1 mutates each agent in isolation
//! (check-up, event multiplier, motion, reflection) and inserts it into a
//! quadtree built fresh for this tick. Phase 2 resolves transmission against
//! that frozen snapshot, so outcomes are deterministic regardless of agent
//! iteration order. Nothing else mutates agent state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::PopulationConfig;
use crate::core::error::Result;
use crate::core::types::{Area, Tick, Vec2};
use crate::entity::Agent;
use crate::health::{HealthState, HealthStateCatalog};
use crate::simulation::events::{self, BehaviorEvent};
use crate::simulation::stats::{EpidemicStats, StatusCounts};
use crate::simulation::transmission::{find_transmissions, ProximityMode};
use crate::spatial::{Quadtree, Rect};

/// The full set of agents and their derived statistics
pub struct Population {
    agents: Vec<Agent>,
    area: Area,
    catalog: HealthStateCatalog,
    status_counts: StatusCounts,
    epidemic_stats: EpidemicStats,
    converged: bool,
    /// Recovered count from the previous summarize, for convergence detection
    last_recovered: Option<usize>,
}

impl Population {
    /// Create a population of exactly `config.total_agents` agents
    ///
    /// Healthy agents are created first, then the initially infected ones,
    /// in stable order. Positions are uniform within the area inset by the
    /// agent radius, velocity components uniform in `[-1, 1]`, ages uniform
    /// in the configured range. The RNG is seeded, so identical inputs give
    /// identical populations.
    pub fn new(
        area: Area,
        catalog: HealthStateCatalog,
        config: &PopulationConfig,
        seed: u64,
    ) -> Result<Self> {
        config.validate(&area)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let healthy = config.total_agents - config.initially_infected;
        let mut agents = Vec::with_capacity(config.total_agents);
        for i in 0..config.total_agents {
            let state = if i < healthy {
                HealthState::Healthy
            } else {
                HealthState::Infected
            };
            agents.push(Self::spawn_agent(&mut rng, &area, config, state));
        }

        let mut population = Self {
            agents,
            area,
            catalog,
            status_counts: StatusCounts::default(),
            epidemic_stats: EpidemicStats::default(),
            converged: false,
            last_recovered: None,
        };
        population.summarize();
        Ok(population)
    }

    fn spawn_agent(
        rng: &mut ChaCha8Rng,
        area: &Area,
        config: &PopulationConfig,
        state: HealthState,
    ) -> Agent {
        let r = config.agent_radius;
        let position = Vec2::new(
            rng.gen_range(r..area.width - r),
            rng.gen_range(r..area.height - r),
        );
        let velocity = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        let (age_min, age_max) = config.age_range;
        let age = if age_min < age_max {
            rng.gen_range(age_min..=age_max)
        } else {
            age_min
        };
        Agent::new(position, velocity, age, r, state)
    }

    /// Advance the simulation by one tick
    ///
    /// Runs the per-agent lifecycle, rebuilds the spatial index, resolves
    /// transmission in the configured mode and refreshes the aggregate
    /// statistics. Must complete before the presentation layer reads state.
    pub fn update(
        &mut self,
        tick: Tick,
        age_threshold: f32,
        mode: ProximityMode,
        events: &[BehaviorEvent],
    ) {
        let multiplier = events::resolve_multiplier(events, tick);

        // Phase 1: per-agent lifecycle and index rebuild
        let mut index: Quadtree<usize> =
            Quadtree::new(Rect::from_extent(self.area.width, self.area.height));
        let mut dropped = 0usize;
        for (i, agent) in self.agents.iter_mut().enumerate() {
            agent.check_up(&self.catalog, age_threshold);
            if let Some(m) = multiplier {
                agent.behavior_multiplier = m;
            }
            agent.advance(&self.catalog);
            agent.reflect(&self.area);
            if !index.insert(agent.position, i) {
                // Boundary-seam edge case: tolerated, the agent simply has no
                // index entry this tick.
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(dropped, tick, "spatial index rejected agent positions");
        }

        // Phase 2: transmission against the frozen snapshot
        let transmissions = find_transmissions(&self.agents, &index, mode);
        let mut infected_this_tick = 0usize;
        for t in &transmissions {
            if self.agents[t.target].state == HealthState::Healthy {
                self.agents[t.target].infect();
                infected_this_tick += 1;
            }
            self.agents[t.source].record_secondary();
        }
        if infected_this_tick > 0 {
            tracing::debug!(tick, new_infections = infected_this_tick, "transmission resolved");
        }

        self.summarize();
    }

    /// Recompute status counts, epidemic stats and the convergence flag
    pub fn summarize(&mut self) {
        self.status_counts = StatusCounts::tally(&self.agents);
        self.epidemic_stats = EpidemicStats::compute(&self.agents);

        // Converged once no agent is infected and no recovery has happened
        // since the last pass; sticky because reinfection does not exist.
        if !self.converged
            && self.status_counts.infected == 0
            && self.last_recovered == Some(self.status_counts.recovered)
        {
            self.converged = true;
            tracing::debug!(
                recovered = self.status_counts.recovered,
                dead = self.status_counts.dead,
                "epidemic converged"
            );
        }
        self.last_recovered = Some(self.status_counts.recovered);
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn catalog(&self) -> &HealthStateCatalog {
        &self.catalog
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.status_counts
    }

    pub fn epidemic_stats(&self) -> EpidemicStats {
        self.epidemic_stats
    }

    pub fn converged(&self) -> bool {
        self.converged
    }
}

//! One simulated individual and its per-tick lifecycle
//!
//! Agents are created once by their owning population and mutated only
//! inside the population's update pass; readers see them as `&Agent`.

use crate::core::types::{Area, Tick, Vec2};
use crate::health::{HealthState, HealthStateCatalog};

/// One simulated individual
#[derive(Debug, Clone)]
pub struct Agent {
    /// Position inside `[0, area.width] x [0, area.height]`
    pub position: Vec2,
    /// Direction vector; persists across ticks except where reflected
    pub velocity: Vec2,
    /// Fixed at creation
    pub age: f32,
    /// Contact radius, fixed at creation
    pub radius: f32,
    /// Current health state; mutated only via the transition rules
    pub state: HealthState,
    /// Ticks spent in the current infection episode
    pub ticks_in_state: Tick,
    /// Ticks spent dead (informational)
    pub ticks_dead: Tick,
    /// Population-wide policy multiplier on speed, default 1.0
    pub behavior_multiplier: f32,
    /// How many Healthy -> Infected transitions this agent caused
    pub secondary_infections: u32,
}

impl Agent {
    pub(crate) fn new(
        position: Vec2,
        velocity: Vec2,
        age: f32,
        radius: f32,
        state: HealthState,
    ) -> Self {
        Self {
            position,
            velocity,
            age,
            radius,
            state,
            ticks_in_state: 0,
            ticks_dead: 0,
            behavior_multiplier: 1.0,
            secondary_infections: 0,
        }
    }

    /// Evaluate the timed state transitions for this tick
    ///
    /// An Infected agent past the state's duration limit becomes Dead when
    /// older than `age_threshold`, Recovered otherwise; below the limit the
    /// episode counter advances. Dead agents only accumulate `ticks_dead`.
    pub(crate) fn check_up(&mut self, catalog: &HealthStateCatalog, age_threshold: f32) {
        if self.state == HealthState::Infected {
            let limit = catalog
                .duration_limit(HealthState::Infected)
                .unwrap_or(Tick::MAX);
            if self.ticks_in_state > limit {
                self.state = if self.age > age_threshold {
                    HealthState::Dead
                } else {
                    HealthState::Recovered
                };
            } else {
                self.ticks_in_state += 1;
            }
        }
        if self.state == HealthState::Dead {
            self.ticks_dead += 1;
        }
    }

    /// Advance position by one tick of motion
    pub(crate) fn advance(&mut self, catalog: &HealthStateCatalog) {
        let speed = catalog.base_speed(self.state) * self.behavior_multiplier;
        self.position += self.velocity * speed;
    }

    /// Reflect off the area bounds, one axis at a time
    ///
    /// Touching the low edge forces that velocity component non-negative,
    /// touching the high edge forces it non-positive; corners get both
    /// corrections in the same tick. The position itself is clamped into
    /// `[radius, dim - radius]` so an overshooting step cannot leave the area.
    pub(crate) fn reflect(&mut self, area: &Area) {
        if self.position.x - self.radius <= 0.0 {
            self.velocity.x = self.velocity.x.abs();
        }
        if self.position.x + self.radius >= area.width {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y - self.radius <= 0.0 {
            self.velocity.y = self.velocity.y.abs();
        }
        if self.position.y + self.radius >= area.height {
            self.velocity.y = -self.velocity.y.abs();
        }
        self.position.x = self.position.x.clamp(self.radius, area.width - self.radius);
        self.position.y = self.position.y.clamp(self.radius, area.height - self.radius);
    }

    /// Healthy -> Infected transition; starts a fresh infection episode
    pub(crate) fn infect(&mut self) {
        debug_assert_eq!(self.state, HealthState::Healthy);
        self.state = HealthState::Infected;
        self.ticks_in_state = 0;
    }

    /// Credit this agent with causing one transmission
    pub(crate) fn record_secondary(&mut self) {
        self.secondary_infections += 1;
    }

    /// True once a Dead agent has outlasted the dead state's duration limit
    ///
    /// Removal itself is left to the data owner; agents stay in the
    /// collection regardless.
    pub fn removal_eligible(&self, catalog: &HealthStateCatalog) -> bool {
        self.state == HealthState::Dead
            && catalog
                .duration_limit(HealthState::Dead)
                .is_some_and(|limit| self.ticks_dead > limit)
    }

    /// True while this agent can still pass the infection on
    pub fn is_infectious(&self) -> bool {
        self.state == HealthState::Infected
    }
}

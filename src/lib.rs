//! Pandemic Sim - agent-based epidemic simulation engine
//!
//! A population of mobile point-agents moves inside a bounded 2-D area.
//! Agents transition between health states based on proximity to infectious
//! agents and elapsed time; aggregate statistics are tracked per tick.
//!
//! Rendering, config-file loading and the windowing loop are external
//! collaborators: they read simulation state through the views exposed by
//! [`simulation::Population`] and never mutate it.

pub mod core;
pub mod entity;
pub mod health;
pub mod simulation;
pub mod spatial;

//! Core module - global events, schedule ordering, and the decision RNG.
//!
//! This module provides the foundation that the combat and enemy systems
//! build upon.

mod events;
mod plugin;
mod rng;
mod schedule;

pub use events::*;
pub use plugin::CorePlugin;
pub use rng::DecisionRng;
pub use schedule::SimulationSet;

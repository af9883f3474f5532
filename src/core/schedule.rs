//! Per-tick system ordering.
//!
//! The simulation is cooperatively time-stepped: every adversary is
//! advanced once per `Update` in a fixed phase order. Keeping the phases
//! in chained sets makes the tick deterministic and lets command flushes
//! (routine starts, target binds) land between phases.

use bevy::prelude::*;

/// Fixed per-tick phase order for the whole simulation.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Cooldowns, intro delays, i-frames, beam timers.
    Timers,
    /// Target validation and acquisition.
    Perception,
    /// In-flight attack/shield routines tick here.
    Routines,
    /// Combat deciders (attack vs. shield vs. fall through).
    Decide,
    /// Patrol / chase / idle movement.
    Locomotion,
    /// Damage and heal application.
    Resolve,
    /// Death handling, despawn timers, state-change signals.
    Cleanup,
}

//! Adversary combat behavior core.
//!
//! Headless ECS implementation of the hostile NPC behavior for a sci-fi
//! first-person game: a melee boss that patrols, chases, attacks and
//! blocks, and a stationary laser turret that fires and shields. The crate
//! owns perception, locomotion, combat decisions, timed routines, health
//! and death; it deliberately does *not* render, play audio, or resolve
//! physics. A presentation layer drives animation and VFX from the
//! [`enemies::StateChanged`] events and the components this crate exposes.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling one aspect:
//!
//! - **Core**: global events, schedule ordering, decision RNG
//! - **Combat**: health, shields, damage and heal application
//! - **Enemies**: boss and turret AI state machines, routines, config data
//! - **Player**: the minimal target-side shim (hit volume, i-frames)
//!
//! Systems run in a fixed per-tick order (see [`core::SimulationSet`]):
//! timers tick first, then perception, then in-flight routines, then the
//! combat decision, then locomotion, then damage resolution and cleanup.

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct AdversaryAiPlugin;

impl Plugin for AdversaryAiPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first: configures schedule sets)
            .add_plugins(core::CorePlugin)
            // Health / damage systems
            .add_plugins(combat::CombatPlugin)
            // Boss and turret AI
            .add_plugins(enemies::EnemyPlugin)
            // Target-side shim
            .add_plugins(player::PlayerPlugin);
    }
}

//! Enemy plugin - registers all adversary AI systems in tick order.

use bevy::prelude::*;

use super::ai;
use super::locomotion;
use super::signals;
use super::targeting;
use super::turret;
use crate::core::SimulationSet;

/// Enemy plugin - boss and turret behavior, death, and signals.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<signals::StateChanged>()
            .add_systems(
                Update,
                (ai::tick_cooldowns, ai::tick_intro).in_set(SimulationSet::Timers),
            )
            .add_systems(
                Update,
                (targeting::validate_targets, targeting::acquire_targets)
                    .chain()
                    .in_set(SimulationSet::Perception),
            )
            .add_systems(
                Update,
                (ai::tick_attack_routines, ai::tick_shield_routines)
                    .in_set(SimulationSet::Routines),
            )
            .add_systems(
                Update,
                (ai::boss_decide, turret::turret_decide).in_set(SimulationSet::Decide),
            )
            .add_systems(
                Update,
                locomotion::boss_locomotion.in_set(SimulationSet::Locomotion),
            )
            .add_systems(
                Update,
                (
                    ai::handle_enemy_death,
                    signals::emit_state_signals,
                    ai::despawn_dead_enemies,
                    turret::tick_beams,
                )
                    .chain()
                    .in_set(SimulationSet::Cleanup),
            );
    }
}

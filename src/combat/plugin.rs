//! Combat plugin - registers damage resolution systems.

use bevy::prelude::*;

use super::systems::{apply_damage, apply_heals};
use crate::core::SimulationSet;

/// Combat plugin - health, shields, damage and heal application.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_damage, apply_heals)
                .chain()
                .in_set(SimulationSet::Resolve),
        );
    }
}

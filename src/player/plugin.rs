//! Player plugin - ticks the post-hit invincibility window.

use bevy::prelude::*;

use crate::combat::tick_invincibility;
use crate::core::SimulationSet;

/// Player plugin - target-side upkeep.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, tick_invincibility.in_set(SimulationSet::Timers));
    }
}

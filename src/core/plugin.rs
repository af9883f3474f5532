//! Core plugin - registers events, the RNG resource, and schedule sets.

use bevy::prelude::*;

use super::events::{DamageEvent, DamageTakenEvent, DeathEvent, HealEvent, HitEvent};
use super::rng::DecisionRng;
use super::schedule::SimulationSet;

/// Core plugin - foundation for all other plugins.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DecisionRng>()
            .add_event::<DamageEvent>()
            .add_event::<HealEvent>()
            .add_event::<DeathEvent>()
            .add_event::<HitEvent>()
            .add_event::<DamageTakenEvent>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Timers,
                    SimulationSet::Perception,
                    SimulationSet::Routines,
                    SimulationSet::Decide,
                    SimulationSet::Locomotion,
                    SimulationSet::Resolve,
                    SimulationSet::Cleanup,
                )
                    .chain(),
            );
    }
}

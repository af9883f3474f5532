//! Shared test harness: a headless app with manually advanced time.

use adversary_ai::combat::{Health, HitVolume, Targetable};
use adversary_ai::core::DecisionRng;
use adversary_ai::AdversaryAiPlugin;
use bevy::prelude::*;
use std::time::Duration;

/// Headless app with all simulation plugins, a seeded RNG, and a `Time`
/// resource the tests advance by hand for deterministic ticks.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(AdversaryAiPlugin);
    app.init_resource::<Time>();
    app.insert_resource(DecisionRng::seeded(7));
    app
}

/// Advance simulated time by `seconds` and run one tick.
pub fn tick(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
}

/// Spawn a bare targetable dummy: something adversaries can perceive,
/// hit with melee spheres and laser rays, and kill.
pub fn spawn_target(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Targetable,
            Transform::from_translation(position),
            Health::new(100.0),
            HitVolume::new(0.5),
        ))
        .id()
}

/// Current health of `entity`.
pub fn health_of(app: &App, entity: Entity) -> f32 {
    app.world()
        .get::<Health>(entity)
        .map(|h| h.current)
        .unwrap_or(f32::NAN)
}

/// Number of events of type `E` sent during the most recent update.
pub fn events_this_update<E: Event>(app: &App) -> usize {
    app.world()
        .resource::<Events<E>>()
        .iter_current_update_events()
        .count()
}

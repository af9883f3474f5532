//! Abstract animation-state signals.
//!
//! The core never touches animators. A presentation layer listens to
//! `StateChanged` and selects clips/VFX from it. Signals fire only on an
//! actual state change, never redundantly per tick.

use bevy::prelude::*;

use super::components::{Enemy, EnemyState};

/// Sent once whenever an adversary's behavior state actually changes.
#[derive(Event, Debug)]
pub struct StateChanged {
    pub entity: Entity,
    pub state: EnemyState,
}

/// State observed the last time signals were emitted.
#[derive(Component, Default)]
pub struct PreviousState(pub EnemyState);

/// Compare against the previously signalled state and emit on change.
pub fn emit_state_signals(
    mut query: Query<(Entity, &EnemyState, &mut PreviousState), With<Enemy>>,
    mut events: EventWriter<StateChanged>,
) {
    for (entity, state, mut previous) in query.iter_mut() {
        if *state != previous.0 {
            previous.0 = *state;
            events.send(StateChanged {
                entity,
                state: *state,
            });
        }
    }
}

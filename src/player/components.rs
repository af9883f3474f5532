//! Player-related components.

use bevy::prelude::*;

use crate::combat::{Health, HitVolume, Invincibility, Targetable};

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Spawn the minimal player entity adversaries can perceive and damage.
///
/// `invincibility_duration` is the i-frame window restarted on every
/// applied hit.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    max_health: f32,
    invincibility_duration: f32,
) -> Entity {
    commands
        .spawn((
            Player,
            Targetable,
            Transform::from_translation(position),
            Health::new(max_health),
            HitVolume::new(0.5),
            Invincibility::new(invincibility_duration),
        ))
        .id()
}

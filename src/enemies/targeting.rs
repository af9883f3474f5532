//! Target acquisition.
//!
//! Bind-once policy: a target acquired inside the detection radius is
//! retained even when it later leaves that radius. The only thing that
//! unbinds a target is the referent disappearing, which re-arms
//! acquisition instead of leaving a dangling reference.

use bevy::prelude::*;

use super::components::{Enemy, Perception, Target};
use crate::combat::{Dead, Targetable};

/// Drop target references whose referent was despawned or stopped being
/// targetable.
pub fn validate_targets(
    mut commands: Commands,
    holders: Query<(Entity, &Target), With<Enemy>>,
    candidates: Query<(), With<Targetable>>,
) {
    for (entity, target) in holders.iter() {
        if candidates.get(target.0).is_err() {
            commands.entity(entity).remove::<Target>();
        }
    }
}

/// Bind the nearest targetable candidate inside the detection radius.
///
/// Runs only for adversaries that currently have no target; once bound,
/// the reference sticks (see module docs).
pub fn acquire_targets(
    mut commands: Commands,
    seekers: Query<(Entity, &Transform, &Perception), (With<Enemy>, Without<Target>, Without<Dead>)>,
    candidates: Query<(Entity, &Transform), (With<Targetable>, Without<Enemy>)>,
) {
    for (seeker, transform, perception) in seekers.iter() {
        let mut nearest: Option<(Entity, f32)> = None;

        for (candidate, candidate_transform) in candidates.iter() {
            let distance = transform
                .translation
                .distance(candidate_transform.translation);
            if distance > perception.detection_range {
                continue;
            }
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((candidate, distance)),
            }
        }

        if let Some((candidate, _)) = nearest {
            commands.entity(seeker).insert(Target(candidate));
        }
    }
}

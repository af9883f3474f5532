//! Boss locomotion - patrol, chase, idle.
//!
//! Runs only while nothing suspends it: the query filters exclude dead,
//! introing, and routine-suspended bosses, so starting a routine *is* the
//! locomotion stop and finishing it *is* the resume. There is no separate
//! stop/resume call to forget.

use bevy::prelude::*;

use super::components::{
    AttackRoutine, Boss, BossStats, EnemyState, IntroDelay, Patrol, Perception, ShieldRoutine,
    Target,
};
use crate::combat::{Dead, Targetable};

/// Distance at which a patrol waypoint counts as reached.
const ARRIVAL_EPSILON: f32 = 0.5;

/// Smoothing factor for facing rotation, per second.
const TURN_RATE: f32 = 10.0;

/// Patrol / chase / idle state machine, re-evaluated every tick.
///
/// Target inside the detection radius but beyond stop distance: chase.
/// Target inside stop distance: idle, combat-ready. Otherwise: walk the
/// patrol route. A boss without a patrol route degrades to standing idle.
pub fn boss_locomotion(
    time: Res<Time>,
    mut query: Query<
        (
            &mut Transform,
            &BossStats,
            &Perception,
            &mut EnemyState,
            Option<&Target>,
            Option<&mut Patrol>,
        ),
        (
            With<Boss>,
            Without<Dead>,
            Without<IntroDelay>,
            Without<AttackRoutine>,
            Without<ShieldRoutine>,
        ),
    >,
    targets: Query<&Transform, (With<Targetable>, Without<Boss>)>,
) {
    let delta = time.delta_secs();

    for (mut transform, stats, perception, mut state, target, patrol) in query.iter_mut() {
        let target_position = target.and_then(|t| targets.get(t.0).ok().map(|t| t.translation));
        let target_distance = target_position.map(|p| transform.translation.distance(p));

        match (target_position, target_distance) {
            (Some(position), Some(distance)) if distance < perception.detection_range => {
                if distance > stats.stop_distance {
                    set_state(&mut state, EnemyState::Chasing);
                    move_toward(&mut transform, position, stats.chase_speed, delta);
                } else {
                    set_state(&mut state, EnemyState::Idle);
                }
            }
            _ => {
                if let Some(mut patrol) = patrol {
                    set_state(&mut state, EnemyState::Patrolling);
                    advance_patrol(&mut transform, &mut patrol, stats.patrol_speed, delta);
                } else {
                    // Missing collaborator: skip the patrol phase rather
                    // than fault the tick.
                    set_state(&mut state, EnemyState::Idle);
                }
            }
        }
    }
}

fn set_state(state: &mut EnemyState, new_state: EnemyState) {
    // Avoid spurious change-detection triggers on redundant writes
    if *state != new_state {
        *state = new_state;
    }
}

fn advance_patrol(transform: &mut Transform, patrol: &mut Patrol, speed: f32, delta: f32) {
    if patrol.points.is_empty() {
        return;
    }
    let waypoint = patrol.points[patrol.current % patrol.points.len()];
    move_toward(transform, waypoint, speed, delta);

    if transform.translation.distance(waypoint) < ARRIVAL_EPSILON {
        patrol.current = (patrol.current + 1) % patrol.points.len();
    }
}

/// Step toward `target`, smoothly rotating facing into the move direction.
fn move_toward(transform: &mut Transform, target: Vec3, speed: f32, delta: f32) {
    let to_target = target - transform.translation;
    let direction = to_target.normalize_or_zero();
    if direction == Vec3::ZERO {
        return;
    }

    // Don't overshoot the target on a long frame
    let step = (speed * delta).min(to_target.length());
    transform.translation += direction * step;

    let facing = Transform::default().looking_to(direction, Vec3::Y).rotation;
    let t = (TURN_RATE * delta).min(1.0);
    transform.rotation = transform.rotation.slerp(facing, t);
}

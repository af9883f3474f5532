//! Turret combat systems.
//!
//! The turret never moves. Its decision gate mirrors the boss's (target
//! in range, attack cooldown expired), but instead of a probability roll
//! it raises its shield whenever the independent shield cooldown has
//! expired, and fires the laser otherwise. Laser damage lands at the
//! instant the routine starts: one ray toward the target's position at
//! that moment, first hit within range takes the damage.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use super::components::{
    AttackRoutine, BeamTimer, Cooldowns, Enemy, EnemyState, IntroDelay, LaserBeam, ShieldRoutine,
    Target, Turret, TurretStats,
};
use crate::combat::{Dead, HitVolume, ShieldState, Targetable};
use crate::core::DamageEvent;

/// Turret combat decision: shield when the shield track allows it,
/// otherwise fire. Each branch consumes only its own cooldown track.
///
/// The gate resolves the bound target by position alone; hit volumes
/// matter only to the ray at delivery, so a target without one can still
/// pull the trigger.
pub fn turret_decide(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Target,
            &TurretStats,
            &mut Cooldowns,
            &mut EnemyState,
            &mut ShieldState,
        ),
        (
            With<Turret>,
            Without<Dead>,
            Without<IntroDelay>,
            Without<AttackRoutine>,
            Without<ShieldRoutine>,
        ),
    >,
    target_positions: Query<&Transform, (With<Targetable>, Without<Enemy>)>,
    targets: Query<(Entity, &Transform, &HitVolume), (With<Targetable>, Without<Enemy>)>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for (entity, transform, target, stats, mut cooldowns, mut state, mut shield) in query.iter_mut()
    {
        let Ok(target_transform) = target_positions.get(target.0) else {
            continue;
        };

        let distance = transform.translation.distance(target_transform.translation);
        if distance > stats.laser_range || cooldowns.attack > 0.0 {
            continue;
        }

        if cooldowns.shield <= 0.0 {
            cooldowns.shield = stats.shield_cooldown;
            shield.active = true;
            *state = EnemyState::Shielding;
            commands.entity(entity).insert(ShieldRoutine {
                remaining: stats.shield_duration,
            });
        } else {
            cooldowns.attack = stats.attack_cooldown;
            fire_laser(
                &mut commands,
                entity,
                transform.translation,
                target_transform.translation,
                stats,
                &targets,
                &mut damage_events,
            );
            *state = EnemyState::Attacking;
            commands
                .entity(entity)
                .insert(AttackRoutine::delivered_at_start(stats.beam_duration));
        }
    }
}

/// Single forward ray from the weapon origin toward the target's position
/// at this instant. The first blocking hit takes the damage; the cosmetic
/// beam spans origin to hit point, or to max range when nothing blocks.
fn fire_laser(
    commands: &mut Commands,
    turret: Entity,
    origin: Vec3,
    target_position: Vec3,
    stats: &TurretStats,
    targets: &Query<(Entity, &Transform, &HitVolume), (With<Targetable>, Without<Enemy>)>,
    damage_events: &mut EventWriter<DamageEvent>,
) {
    let Ok(direction) = Dir3::new(target_position - origin) else {
        return;
    };

    let candidates: Vec<(Entity, Vec3, f32)> = targets
        .iter()
        .map(|(entity, transform, volume)| (entity, transform.translation, volume.radius))
        .collect();

    let end = match laser_hit(origin, direction, stats.laser_range, &candidates) {
        Some((hit, distance)) => {
            damage_events.send(DamageEvent {
                target: hit,
                source: Some(turret),
                amount: stats.laser_damage,
            });
            origin + direction * distance
        }
        None => origin + direction * stats.laser_range,
    };

    commands.spawn((
        LaserBeam { origin, end },
        BeamTimer::new(stats.beam_duration),
    ));
}

/// Nearest sphere hit volume intersected by the ray, within `range`.
fn laser_hit(
    origin: Vec3,
    direction: Dir3,
    range: f32,
    candidates: &[(Entity, Vec3, f32)],
) -> Option<(Entity, f32)> {
    let ray = RayCast3d::from_ray(
        Ray3d {
            origin,
            direction,
        },
        range,
    );

    let mut nearest: Option<(Entity, f32)> = None;
    for &(entity, center, radius) in candidates {
        let Some(distance) = ray.sphere_intersection_at(&BoundingSphere::new(center, radius))
        else {
            continue;
        };
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((entity, distance)),
        }
    }
    nearest
}

/// Expire cosmetic beams after their display duration.
pub fn tick_beams(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut BeamTimer), With<LaserBeam>>,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.0.tick(time.delta());
        if timer.0.finished() {
            commands.entity(entity).despawn();
        }
    }
}

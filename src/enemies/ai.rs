//! Shared adversary AI systems: timers, the boss combat decider, routine
//! ticking, and the death transition.
//!
//! Routines are plain components with a remaining-duration field, advanced
//! once per tick. Only one routine can be in flight per adversary - the
//! deciders filter on `Without<AttackRoutine>, Without<ShieldRoutine>`, so
//! a start attempt while one is active is structurally a no-op.

use bevy::prelude::*;
use log::info;

use super::components::{
    AttackRoutine, Boss, BossStats, Cooldowns, DeathTimer, Enemy, EnemyState, IntroDelay,
    RewardDrop, RewardPickup, ShieldRoutine, Target,
};
use super::data::DeathDelay;
use crate::combat::{Dead, HitVolume, ShieldState, Targetable};
use crate::core::{DamageEvent, DeathEvent, DecisionRng};

/// Count down both decision cooldowns, clamping at zero.
pub fn tick_cooldowns(time: Res<Time>, mut query: Query<&mut Cooldowns, Without<Dead>>) {
    let delta = time.delta_secs();
    for mut cooldowns in query.iter_mut() {
        cooldowns.attack = (cooldowns.attack - delta).max(0.0);
        cooldowns.shield = (cooldowns.shield - delta).max(0.0);
    }
}

/// Count down intro delays; an adversary whose intro ends starts acting on
/// the same tick's decision phase.
pub fn tick_intro(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut IntroDelay), Without<Dead>>,
) {
    for (entity, mut intro) in query.iter_mut() {
        intro.remaining -= time.delta_secs();
        if intro.remaining <= 0.0 {
            commands.entity(entity).remove::<IntroDelay>();
        }
    }
}

/// Boss combat decision, evaluated once per tick while nothing suspends it.
///
/// Gate: a bound target inside attack range with the attack cooldown
/// expired. One uniform roll then picks block over attack with
/// `block_chance` probability. The cooldown is reset exactly once, at the
/// moment the routine starts, whichever branch wins.
pub fn boss_decide(
    mut commands: Commands,
    mut rng: ResMut<DecisionRng>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Target,
            &BossStats,
            &mut Cooldowns,
            &mut EnemyState,
            &mut ShieldState,
        ),
        (
            With<Boss>,
            Without<Dead>,
            Without<IntroDelay>,
            Without<AttackRoutine>,
            Without<ShieldRoutine>,
        ),
    >,
    targets: Query<&Transform, (With<Targetable>, Without<Enemy>)>,
) {
    for (entity, transform, target, stats, mut cooldowns, mut state, mut shield) in query.iter_mut()
    {
        let Ok(target_transform) = targets.get(target.0) else {
            continue;
        };

        let distance = transform.translation.distance(target_transform.translation);
        if distance > stats.attack_range || cooldowns.attack > 0.0 {
            continue;
        }

        cooldowns.attack = stats.attack_cooldown;

        if rng.roll() < stats.block_chance {
            shield.active = true;
            *state = EnemyState::Blocking;
            commands.entity(entity).insert(ShieldRoutine {
                remaining: stats.block_duration,
            });
        } else {
            *state = EnemyState::Attacking;
            commands.entity(entity).insert(AttackRoutine::with_windup(
                stats.attack_windup,
                stats.attack_recovery,
            ));
        }
    }
}

/// Advance in-flight attack routines.
///
/// For the boss, the damage query runs once when the wind-up elapses: a
/// sphere region test at the delivery point against every targetable hit
/// volume. When the routine runs out it is removed, which resumes
/// locomotion and the decider on the next evaluation.
pub fn tick_attack_routines(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<
        (
            Entity,
            &mut AttackRoutine,
            &mut EnemyState,
            &Transform,
            Option<&BossStats>,
        ),
        Without<Dead>,
    >,
    targets: Query<(Entity, &Transform, &HitVolume), (With<Targetable>, Without<Enemy>)>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for (entity, mut routine, mut state, transform, boss_stats) in query.iter_mut() {
        routine.remaining = (routine.remaining - time.delta_secs()).max(0.0);

        if !routine.delivered && routine.elapsed() >= routine.windup {
            routine.delivered = true;
            if let Some(stats) = boss_stats {
                deliver_melee(entity, transform, stats, &targets, &mut damage_events);
            }
        }

        if routine.remaining <= 0.0 {
            commands.entity(entity).remove::<AttackRoutine>();
            *state = EnemyState::Idle;
        }
    }
}

/// Single area damage query at the melee delivery point.
fn deliver_melee(
    attacker: Entity,
    transform: &Transform,
    stats: &BossStats,
    targets: &Query<(Entity, &Transform, &HitVolume), (With<Targetable>, Without<Enemy>)>,
    damage_events: &mut EventWriter<DamageEvent>,
) {
    let center = transform.translation + transform.forward() * stats.attack_point_offset;

    for (target, target_transform, volume) in targets.iter() {
        let distance = center.distance(target_transform.translation);
        if distance <= stats.attack_range + volume.radius {
            damage_events.send(DamageEvent {
                target,
                source: Some(attacker),
                amount: stats.attack_damage,
            });
        }
    }
}

/// Advance in-flight shield routines; lowering the shield returns the
/// adversary to idle evaluation.
pub fn tick_shield_routines(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<
        (Entity, &mut ShieldRoutine, &mut ShieldState, &mut EnemyState),
        Without<Dead>,
    >,
) {
    for (entity, mut routine, mut shield, mut state) in query.iter_mut() {
        routine.remaining -= time.delta_secs();
        if routine.remaining <= 0.0 {
            shield.active = false;
            *state = EnemyState::Idle;
            commands.entity(entity).remove::<ShieldRoutine>();
        }
    }
}

/// Death transition for adversaries.
///
/// Runs in the same tick as the lethal damage: cancels any in-flight
/// routine or intro, force-clears the shield, pins the state to `Dead`,
/// drops the reward payload, and schedules despawn after the death
/// display window.
pub fn handle_enemy_death(
    mut commands: Commands,
    mut death_events: EventReader<DeathEvent>,
    mut query: Query<
        (
            &Transform,
            &mut EnemyState,
            &mut ShieldState,
            &DeathDelay,
            Option<&RewardDrop>,
        ),
        With<Enemy>,
    >,
) {
    for event in death_events.read() {
        let Ok((transform, mut state, mut shield, delay, reward)) = query.get_mut(event.entity)
        else {
            continue;
        };

        shield.active = false;
        *state = EnemyState::Dead;

        commands
            .entity(event.entity)
            .remove::<(AttackRoutine, ShieldRoutine, IntroDelay)>()
            .insert(DeathTimer::new(delay.0));

        if let Some(reward) = reward {
            commands.spawn((
                Transform::from_translation(transform.translation),
                RewardPickup {
                    amount: reward.amount,
                },
            ));
            info!("dropped reward of {} at {:?}", reward.amount, transform.translation);
        }
    }
}

/// Despawn adversaries once their death display window ends.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathTimer)>,
) {
    for (entity, mut death_timer) in query.iter_mut() {
        death_timer.0.tick(time.delta());

        if death_timer.0.finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

//! Boss behavior: perception, locomotion, combat decisions, routines,
//! and the death sequence, driven through the full app schedule.

mod common;

use adversary_ai::combat::{Dead, ShieldState};
use adversary_ai::core::{DamageEvent, DeathEvent};
use adversary_ai::enemies::{
    spawn_boss, AttackRoutine, BossDefinition, Cooldowns, DeathTimer, EnemyState, Patrol,
    ShieldRoutine, StateChanged, Target,
};
use bevy::prelude::*;

use common::*;

/// Definition tuned for fast tests: no intro, short swings, short death
/// display. Individual tests override the decision fields they exercise.
fn test_definition() -> BossDefinition {
    BossDefinition {
        intro_duration: 0.0,
        attack_windup: 0.2,
        attack_recovery: 0.2,
        death_delay: 0.3,
        ..Default::default()
    }
}

fn spawn_test_boss(
    app: &mut App,
    definition: &BossDefinition,
    position: Vec3,
    patrol: Vec<Vec3>,
) -> Entity {
    let world = app.world_mut();
    let boss = {
        let mut commands = world.commands();
        spawn_boss(&mut commands, definition, position, patrol).expect("definition is valid")
    };
    world.flush();
    boss
}

fn state_of(app: &App, entity: Entity) -> EnemyState {
    *app.world().get::<EnemyState>(entity).unwrap()
}

#[test]
fn empty_patrol_route_is_rejected_at_spawn() {
    let mut app = test_app();
    let world = app.world_mut();
    let mut commands = world.commands();
    let result = spawn_boss(&mut commands, &test_definition(), Vec3::ZERO, vec![]);
    assert!(result.is_err());
}

#[test]
fn chases_detected_target_and_idles_in_reach() {
    let mut app = test_app();
    // Attack range below stop distance keeps the decider out of the way
    let definition = BossDefinition {
        attack_range: 0.5,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    let target = spawn_target(&mut app, Vec3::new(5.0, 0.0, 0.0));

    tick(&mut app, 0.1);
    assert_eq!(app.world().get::<Target>(boss).unwrap().0, target);
    assert_eq!(state_of(&app, boss), EnemyState::Chasing);
    let x = app.world().get::<Transform>(boss).unwrap().translation.x;
    assert!(x > 0.0, "boss should step toward the target, moved to x={x}");

    // 6 m/s across the remaining 3.5 m: done well within a second
    for _ in 0..10 {
        tick(&mut app, 0.1);
    }
    assert_eq!(state_of(&app, boss), EnemyState::Idle);
    let position = app.world().get::<Transform>(boss).unwrap().translation;
    let distance = position.distance(Vec3::new(5.0, 0.0, 0.0));
    assert!(
        distance <= definition.stop_distance + 0.01,
        "boss stopped {distance} away"
    );
}

#[test]
fn patrols_waypoints_cyclically_without_a_target() {
    let mut app = test_app();
    let route = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)];
    let boss = spawn_test_boss(&mut app, &test_definition(), Vec3::ZERO, route);

    tick(&mut app, 0.3);
    assert_eq!(state_of(&app, boss), EnemyState::Patrolling);
    // 0.6 m of the 1 m leg walked: inside the arrival radius, so the
    // route advances to the next waypoint
    assert_eq!(app.world().get::<Patrol>(boss).unwrap().current, 1);

    // One long step lands exactly on the second waypoint (movement never
    // overshoots), so the route wraps back to the first
    tick(&mut app, 1.0);
    assert_eq!(app.world().get::<Patrol>(boss).unwrap().current, 0);
}

#[test]
fn attack_routine_freezes_locomotion_and_lands_once() {
    let mut app = test_app();
    let definition = BossDefinition {
        block_chance: 0.0,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    // Inside attack range but outside stop distance, so any locomotion
    // leak would show up as movement
    let target = spawn_target(&mut app, Vec3::new(2.0, 0.0, 0.0));

    tick(&mut app, 0.05);
    assert_eq!(state_of(&app, boss), EnemyState::Attacking);
    assert!(app.world().get::<AttackRoutine>(boss).is_some());
    assert_eq!(
        app.world().get::<Transform>(boss).unwrap().translation,
        Vec3::ZERO
    );
    let cooldown = app.world().get::<Cooldowns>(boss).unwrap().attack;
    assert!(cooldown > 0.0, "attack cooldown restarts when the swing starts");

    // Wind-up still running: no damage, no movement
    tick(&mut app, 0.1);
    assert_eq!(health_of(&app, target), 100.0);
    assert_eq!(
        app.world().get::<Transform>(boss).unwrap().translation,
        Vec3::ZERO
    );

    // Wind-up elapses: the one damage query runs
    tick(&mut app, 0.1);
    assert_eq!(health_of(&app, target), 75.0);

    // Wind-down: no second application
    tick(&mut app, 0.1);
    assert_eq!(health_of(&app, target), 75.0);

    // Routine over: removed, locomotion resumes (chase, still on cooldown)
    tick(&mut app, 0.1);
    assert!(app.world().get::<AttackRoutine>(boss).is_none());
    assert_ne!(
        app.world().get::<Transform>(boss).unwrap().translation,
        Vec3::ZERO
    );
    assert_eq!(health_of(&app, target), 75.0);
}

#[test]
fn certain_block_raises_and_lowers_the_shield() {
    let mut app = test_app();
    let definition = BossDefinition {
        block_chance: 1.0,
        block_duration: 0.3,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    spawn_target(&mut app, Vec3::new(1.0, 0.0, 0.0));

    tick(&mut app, 0.05);
    assert_eq!(state_of(&app, boss), EnemyState::Blocking);
    assert!(app.world().get::<ShieldRoutine>(boss).is_some());
    assert!(
        app.world().get::<ShieldState>(boss).unwrap().active
    );

    // 20 into the boss's 50% block costs 10
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: None,
        amount: 20.0,
    });
    tick(&mut app, 0.1);
    assert_eq!(health_of(&app, boss), 90.0);

    // Block window ends: shield down, routine gone
    tick(&mut app, 0.1);
    tick(&mut app, 0.1);
    assert!(app.world().get::<ShieldRoutine>(boss).is_none());
    assert!(
        !app.world().get::<ShieldState>(boss).unwrap().active
    );
    assert_ne!(state_of(&app, boss), EnemyState::Blocking);
}

#[test]
fn decider_stays_out_while_a_routine_is_in_flight() {
    let mut app = test_app();
    let definition = BossDefinition {
        block_chance: 1.0,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    spawn_target(&mut app, Vec3::new(1.0, 0.0, 0.0));

    // A long swing already in flight
    app.world_mut()
        .entity_mut(boss)
        .insert(AttackRoutine::with_windup(5.0, 0.0));

    tick(&mut app, 0.1);
    // Even a guaranteed block cannot start: the decider never ran
    assert!(app.world().get::<ShieldRoutine>(boss).is_none());
    assert_eq!(app.world().get::<Cooldowns>(boss).unwrap().attack, 0.0);
}

#[test]
fn death_cancels_the_routine_and_despawns_after_the_display_window() {
    let mut app = test_app();
    let definition = BossDefinition {
        block_chance: 0.0,
        attack_windup: 1.0,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    let target = spawn_target(&mut app, Vec3::new(2.0, 0.0, 0.0));

    tick(&mut app, 0.05);
    assert_eq!(state_of(&app, boss), EnemyState::Attacking);

    // Killed mid-wind-up
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: None,
        amount: 200.0,
    });
    tick(&mut app, 0.1);
    assert_eq!(events_this_update::<DeathEvent>(&app), 1);
    assert!(app.world().get::<Dead>(boss).is_some());
    assert_eq!(state_of(&app, boss), EnemyState::Dead);
    assert!(app.world().get::<AttackRoutine>(boss).is_none());
    assert!(app.world().get::<DeathTimer>(boss).is_some());

    // The cancelled swing never lands, and the corpse despawns after the
    // display window
    tick(&mut app, 0.2);
    tick(&mut app, 0.2);
    assert!(!app.world().entities().contains(boss));
    assert_eq!(health_of(&app, target), 100.0);
}

#[test]
fn target_sticks_until_the_referent_disappears() {
    let mut app = test_app();
    let definition = BossDefinition {
        attack_range: 0.5,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    let first = spawn_target(&mut app, Vec3::new(5.0, 0.0, 0.0));

    tick(&mut app, 0.1);
    assert_eq!(app.world().get::<Target>(boss).unwrap().0, first);

    // Bind-once: leaving the detection radius does not unbind
    app.world_mut()
        .get_mut::<Transform>(first)
        .unwrap()
        .translation = Vec3::new(50.0, 0.0, 0.0);
    tick(&mut app, 0.1);
    assert_eq!(app.world().get::<Target>(boss).unwrap().0, first);
    assert_eq!(state_of(&app, boss), EnemyState::Patrolling);

    // Despawning the referent re-arms acquisition
    app.world_mut().despawn(first);
    tick(&mut app, 0.1);
    assert!(app.world().get::<Target>(boss).is_none());

    let second = spawn_target(&mut app, Vec3::new(3.0, 0.0, 0.0));
    tick(&mut app, 0.1);
    assert_eq!(app.world().get::<Target>(boss).unwrap().0, second);
}

#[test]
fn intro_delay_holds_all_behavior_until_it_runs_out() {
    let mut app = test_app();
    let definition = BossDefinition {
        intro_duration: 1.0,
        block_chance: 0.0,
        ..test_definition()
    };
    let boss = spawn_test_boss(&mut app, &definition, Vec3::ZERO, vec![Vec3::new(0.0, 0.0, 10.0)]);
    spawn_target(&mut app, Vec3::new(1.0, 0.0, 0.0));

    // In range with expired cooldowns, but still introing
    tick(&mut app, 0.3);
    tick(&mut app, 0.3);
    assert_eq!(state_of(&app, boss), EnemyState::Idle);
    assert!(app.world().get::<AttackRoutine>(boss).is_none());
    assert_eq!(
        app.world().get::<Transform>(boss).unwrap().translation,
        Vec3::ZERO
    );

    // The tick the intro ends, the decision phase runs
    tick(&mut app, 0.5);
    assert_eq!(state_of(&app, boss), EnemyState::Attacking);
    assert!(app.world().get::<AttackRoutine>(boss).is_some());
}

#[test]
fn state_signals_fire_once_per_actual_change() {
    let mut app = test_app();
    let boss = spawn_test_boss(
        &mut app,
        &test_definition(),
        Vec3::ZERO,
        vec![Vec3::new(0.0, 0.0, 10.0)],
    );

    // Idle -> Patrolling
    tick(&mut app, 0.1);
    assert_eq!(state_of(&app, boss), EnemyState::Patrolling);
    assert_eq!(events_this_update::<StateChanged>(&app), 1);

    // Still patrolling: no redundant signal
    tick(&mut app, 0.1);
    assert_eq!(events_this_update::<StateChanged>(&app), 0);
}

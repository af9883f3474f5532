//! Damage and heal application.
//!
//! All health mutation funnels through `apply_damage` / `apply_heals` so
//! the invariants (no negative health, no resurrection, one death event)
//! hold no matter who sends the events.

use bevy::prelude::*;
use log::info;

use super::components::{Dead, Health, Invincibility, ShieldState};
use crate::core::{DamageEvent, DamageTakenEvent, DeathEvent, HealEvent, HitEvent};

/// Damage that gets through a shield absorbing `damage_reduction`.
///
/// Rounded up: the attacker never loses a whole point to truncation, and a
/// positive hit against a partial shield always costs at least 1.
pub fn mitigated_damage(amount: f32, damage_reduction: f32) -> f32 {
    (amount * (1.0 - damage_reduction)).ceil()
}

/// Apply incoming `DamageEvent`s to health.
///
/// Skips dead targets, non-positive amounts, and targets inside an
/// invincibility window. Shield mitigation applies before the subtraction.
/// Emits exactly one `DeathEvent` per entity, ever.
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut query: Query<(
        &mut Health,
        Option<&ShieldState>,
        Option<&mut Invincibility>,
        Option<&Dead>,
    )>,
    mut death_events: EventWriter<DeathEvent>,
    mut hit_events: EventWriter<HitEvent>,
    mut taken_events: EventWriter<DamageTakenEvent>,
) {
    // Track entities that died this frame so a second event in the same
    // batch can't emit a duplicate DeathEvent.
    let mut died_this_frame = std::collections::HashSet::new();

    for event in damage_events.read() {
        if event.amount <= 0.0 {
            continue;
        }
        if died_this_frame.contains(&event.target) {
            continue;
        }

        let Ok((mut health, shield, invincibility, dead)) = query.get_mut(event.target) else {
            continue;
        };

        // Damage after death is silently ignored
        if dead.is_some() {
            continue;
        }

        if let Some(ref inv) = invincibility {
            if inv.is_active() {
                continue;
            }
        }

        let final_damage = match shield {
            Some(shield) if shield.active => mitigated_damage(event.amount, shield.damage_reduction),
            _ => event.amount,
        };

        let applied = health.take_damage(final_damage);
        taken_events.send(DamageTakenEvent {
            entity: event.target,
            amount: applied,
        });

        // Restart the i-frame window on every applied hit
        if let Some(mut inv) = invincibility {
            inv.remaining = inv.duration;
        }

        if health.is_depleted() {
            died_this_frame.insert(event.target);
            commands.entity(event.target).insert(Dead);
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: event.source,
            });
            info!("entity {:?} died", event.target);
        } else {
            hit_events.send(HitEvent {
                entity: event.target,
            });
        }
    }
}

/// Apply incoming `HealEvent`s, clamped to max health.
///
/// The dead stay dead: healing a corpse is a no-op, which keeps the
/// `health == 0` / `Dead` pairing intact.
pub fn apply_heals(
    mut heal_events: EventReader<HealEvent>,
    mut query: Query<(&mut Health, Option<&Dead>)>,
) {
    for event in heal_events.read() {
        if event.amount <= 0.0 {
            continue;
        }
        let Ok((mut health, dead)) = query.get_mut(event.target) else {
            continue;
        };
        if dead.is_some() {
            continue;
        }
        health.heal(event.amount);
    }
}

/// Count down invincibility windows.
pub fn tick_invincibility(time: Res<Time>, mut query: Query<&mut Invincibility>) {
    for mut inv in query.iter_mut() {
        if inv.remaining > 0.0 {
            inv.remaining = (inv.remaining - time.delta_secs()).max(0.0);
        }
    }
}

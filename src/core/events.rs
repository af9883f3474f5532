//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. Attack delivery sends
//! `DamageEvent`s, and the health system receives them to apply the actual
//! health reduction. External callers (projectile hits, melee swings, UI
//! debug tools) use the same events - sending a `DamageEvent` is the only
//! way anything outside this crate mutates an adversary.

use bevy::prelude::*;

/// Sent to deal damage to an entity.
///
/// This is the universal damage-receiving capability: anything with a
/// [`crate::combat::Health`] component can be targeted. The damage system
/// applies shield mitigation and invincibility windows before reducing
/// health.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage (if any)
    pub source: Option<Entity>,
    /// Damage amount before mitigation. Non-positive amounts are ignored.
    pub amount: f32,
}

/// Sent to heal an entity. Clamped to max health; ignored for the dead.
#[derive(Event)]
pub struct HealEvent {
    /// Entity being healed
    pub target: Entity,
    /// Heal amount
    pub amount: f32,
}

/// Sent exactly once when an entity dies (health reaches 0).
///
/// Systems listen for this to trigger death animations, spawn rewards,
/// and schedule despawn. Never sent twice for the same entity.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if known)
    pub killed_by: Option<Entity>,
}

/// Sent when an entity takes damage but survives.
///
/// Presentation layers use this for hurt flinch animations.
#[derive(Event)]
pub struct HitEvent {
    /// Entity that was hit
    pub entity: Entity,
}

/// Sent whenever damage was actually applied, with the post-mitigation
/// amount. UI layers use this for damage numbers and screen feedback.
#[derive(Event)]
pub struct DamageTakenEvent {
    /// Entity that took the damage
    pub entity: Entity,
    /// Amount actually subtracted from health
    pub amount: f32,
}

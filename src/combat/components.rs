//! Combat-related components.

use bevy::prelude::*;

/// Component for entities that can take damage.
///
/// Single source of truth for health. Mutated only by the damage and heal
/// systems in this module; everything else reads.
#[derive(Component, Debug)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// Create at full health.
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`, clamped at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Add `amount`, clamped at max. Returns the health actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.max
    }
}

/// Marker component for entities that have died.
///
/// Terminal: nothing removes this marker, and the damage/heal systems
/// ignore entities that carry it.
#[derive(Component)]
pub struct Dead;

/// Damage mitigation window.
///
/// `active` is raised and lowered by the shield routine; while raised,
/// incoming damage is reduced by `damage_reduction` (rounded up, so a
/// positive hit never mitigates to zero).
#[derive(Component, Debug)]
pub struct ShieldState {
    pub active: bool,
    /// Fraction of incoming damage absorbed, in `[0, 1]`.
    pub damage_reduction: f32,
}

impl ShieldState {
    pub fn new(damage_reduction: f32) -> Self {
        Self {
            active: false,
            damage_reduction,
        }
    }
}

/// Invincibility window granted after taking a hit (player variant).
///
/// While `remaining > 0` incoming damage is ignored entirely. Restarted to
/// `duration` every time damage is actually applied.
#[derive(Component, Debug)]
pub struct Invincibility {
    pub duration: f32,
    pub remaining: f32,
}

impl Invincibility {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Marker for entities adversaries may acquire and attack (the target
/// layer filter for region and ray tests).
#[derive(Component)]
pub struct Targetable;

/// Sphere hit volume used by melee region tests and laser ray tests.
#[derive(Component, Debug)]
pub struct HitVolume {
    pub radius: f32,
}

impl HitVolume {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn health_clamps_at_zero_and_max() {
        let mut health = Health::new(50.0);
        assert_relative_eq!(health.take_damage(80.0), 50.0);
        assert_relative_eq!(health.current, 0.0);
        assert!(health.is_depleted());

        health.heal(200.0);
        assert_relative_eq!(health.current, 50.0);
        assert_relative_eq!(health.percentage(), 1.0);
    }

    #[test]
    fn invincibility_starts_inactive() {
        let inv = Invincibility::new(1.0);
        assert!(!inv.is_active());
    }
}

//! Adversary components.

use bevy::prelude::*;

/// Marker component for all adversaries (boss and turret).
#[derive(Component)]
pub struct Enemy;

/// Marker for the melee boss variant.
#[derive(Component)]
pub struct Boss;

/// Marker for the stationary laser turret variant.
#[derive(Component)]
pub struct Turret;

/// Behavior state machine for an adversary.
///
/// Exactly one state is active at a time. `Dead` is terminal and
/// suppresses every other transition. `Blocking` is the boss's shield
/// window, `Shielding` the turret's.
#[derive(Component, Default, PartialEq, Clone, Copy, Debug)]
pub enum EnemyState {
    /// Standing still, combat-ready.
    #[default]
    Idle,
    /// Walking the patrol route.
    Patrolling,
    /// Moving toward the acquired target.
    Chasing,
    /// Inside an attack routine; locomotion suspended.
    Attacking,
    /// Boss shield window; locomotion suspended.
    Blocking,
    /// Turret shield window.
    Shielding,
    /// Terminal. Set once, never left.
    Dead,
}

/// Detection radius for target acquisition.
#[derive(Component, Debug)]
pub struct Perception {
    pub detection_range: f32,
}

/// Non-owning reference to the acquired target.
///
/// Bound once by the acquisition system and retained until the referent
/// disappears; removal re-arms acquisition.
#[derive(Component, Debug)]
pub struct Target(pub Entity);

/// Remaining cooldown time per decision track, in seconds.
///
/// Ticked down once per frame and clamped at zero. Spawned pre-expired so
/// a fresh adversary can act immediately.
#[derive(Component, Debug, Default)]
pub struct Cooldowns {
    pub attack: f32,
    pub shield: f32,
}

/// Cyclic patrol route for the boss.
#[derive(Component, Debug)]
pub struct Patrol {
    pub points: Vec<Vec3>,
    pub current: usize,
}

impl Patrol {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points, current: 0 }
    }
}

/// In-flight attack routine.
///
/// Presence of this component suspends locomotion and the decider;
/// removal resumes them. `delivered` latches the single damage
/// application per invocation.
#[derive(Component, Debug)]
pub struct AttackRoutine {
    /// Total routine length (wind-up + wind-down), seconds.
    pub duration: f32,
    /// Time left until the routine exits.
    pub remaining: f32,
    /// Elapsed time at which damage is delivered (boss). Zero means the
    /// damage was delivered at routine start (turret).
    pub windup: f32,
    /// Whether the damage query has already run.
    pub delivered: bool,
}

impl AttackRoutine {
    /// Boss wind-up/wind-down sequence; damage lands when `windup` elapses.
    pub fn with_windup(windup: f32, recovery: f32) -> Self {
        Self {
            duration: windup + recovery,
            remaining: windup + recovery,
            windup,
            delivered: false,
        }
    }

    /// Routine whose damage was already applied at start (turret laser).
    pub fn delivered_at_start(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
            windup: 0.0,
            delivered: true,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.duration - self.remaining
    }
}

/// In-flight shield routine; the mitigation window.
#[derive(Component, Debug)]
pub struct ShieldRoutine {
    pub remaining: f32,
}

/// Intro delay: the adversary holds still (no decisions, no locomotion)
/// until this runs out. Death cancels it.
#[derive(Component, Debug)]
pub struct IntroDelay {
    pub remaining: f32,
}

/// Time to keep the corpse around before despawning (death display window).
#[derive(Component)]
pub struct DeathTimer(pub Timer);

impl DeathTimer {
    pub fn new(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

/// Reward payload dropped on death, if any.
#[derive(Component, Debug)]
pub struct RewardDrop {
    pub amount: u32,
}

/// Reward pickup entity spawned at the corpse position. Collection is
/// outside this crate.
#[derive(Component, Debug)]
pub struct RewardPickup {
    pub amount: u32,
}

/// Transient cosmetic laser beam, for the presentation layer to render.
#[derive(Component, Debug)]
pub struct LaserBeam {
    pub origin: Vec3,
    pub end: Vec3,
}

/// Display duration of a laser beam; the beam despawns when it finishes.
#[derive(Component)]
pub struct BeamTimer(pub Timer);

impl BeamTimer {
    pub fn new(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

/// Boss tuning values, immutable after spawn.
#[derive(Component, Clone, Debug)]
pub struct BossStats {
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub stop_distance: f32,
    pub attack_range: f32,
    /// Forward offset of the melee delivery point from the boss origin.
    pub attack_point_offset: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    pub attack_windup: f32,
    pub attack_recovery: f32,
    pub block_chance: f32,
    pub block_duration: f32,
}

/// Turret tuning values, immutable after spawn.
#[derive(Component, Clone, Debug)]
pub struct TurretStats {
    pub laser_range: f32,
    pub laser_damage: f32,
    pub attack_cooldown: f32,
    pub beam_duration: f32,
    pub shield_duration: f32,
    pub shield_cooldown: f32,
}

//! Adversary definitions: validation, RON loading, and spawning.

use bevy::prelude::*;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::{
    Boss, BossStats, Cooldowns, Enemy, EnemyState, IntroDelay, Patrol, Perception, RewardDrop,
    Turret, TurretStats,
};
use super::error::ConfigError;
use super::signals::PreviousState;
use crate::combat::{Health, HitVolume, ShieldState};

/// Boss definition, loadable from a RON file.
///
/// Default values mirror the first-boss tuning: an 8 m detection radius,
/// 2.5 m melee reach, 2 s attack cooldown and a 25% block chance.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BossDefinition {
    pub name: String,
    pub max_health: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub detection_range: f32,
    pub stop_distance: f32,
    pub attack_range: f32,
    pub attack_point_offset: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    pub attack_windup: f32,
    pub attack_recovery: f32,
    pub block_chance: f32,
    pub block_duration: f32,
    pub shield_damage_reduction: f32,
    /// Hold time before the boss starts acting (the staged wake-up).
    pub intro_duration: f32,
    pub death_delay: f32,
    pub hit_radius: f32,
    pub reward_amount: Option<u32>,
}

impl Default for BossDefinition {
    fn default() -> Self {
        Self {
            name: "first_boss".to_string(),
            max_health: 100.0,
            patrol_speed: 2.0,
            chase_speed: 6.0,
            detection_range: 8.0,
            stop_distance: 1.5,
            attack_range: 2.5,
            attack_point_offset: 1.0,
            attack_damage: 25.0,
            attack_cooldown: 2.0,
            attack_windup: 0.7,
            attack_recovery: 0.5,
            block_chance: 0.25,
            block_duration: 1.5,
            shield_damage_reduction: 0.5,
            intro_duration: 8.5,
            death_delay: 6.0,
            hit_radius: 0.6,
            reward_amount: None,
        }
    }
}

impl BossDefinition {
    /// Check every field that would otherwise fault per-tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_positive(&self.name, "max_health", self.max_health)?;
        validate_positive(&self.name, "patrol_speed", self.patrol_speed)?;
        validate_positive(&self.name, "chase_speed", self.chase_speed)?;
        validate_positive(&self.name, "detection_range", self.detection_range)?;
        validate_positive(&self.name, "stop_distance", self.stop_distance)?;
        validate_positive(&self.name, "attack_range", self.attack_range)?;
        validate_positive(&self.name, "attack_damage", self.attack_damage)?;
        validate_positive(&self.name, "attack_cooldown", self.attack_cooldown)?;
        validate_positive(&self.name, "attack_windup", self.attack_windup)?;
        validate_positive(&self.name, "block_duration", self.block_duration)?;
        validate_fraction(&self.name, "block_chance", self.block_chance)?;
        validate_fraction(
            &self.name,
            "shield_damage_reduction",
            self.shield_damage_reduction,
        )?;
        Ok(())
    }

    fn stats(&self) -> BossStats {
        BossStats {
            patrol_speed: self.patrol_speed,
            chase_speed: self.chase_speed,
            stop_distance: self.stop_distance,
            attack_range: self.attack_range,
            attack_point_offset: self.attack_point_offset,
            attack_damage: self.attack_damage,
            attack_cooldown: self.attack_cooldown,
            attack_windup: self.attack_windup,
            attack_recovery: self.attack_recovery,
            block_chance: self.block_chance,
            block_duration: self.block_duration,
        }
    }
}

/// Turret definition, loadable from a RON file.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TurretDefinition {
    pub name: String,
    pub max_health: f32,
    pub detection_range: f32,
    pub laser_range: f32,
    pub laser_damage: f32,
    pub attack_cooldown: f32,
    pub beam_duration: f32,
    pub shield_duration: f32,
    pub shield_cooldown: f32,
    pub shield_damage_reduction: f32,
    pub death_delay: f32,
    pub hit_radius: f32,
    pub reward_amount: Option<u32>,
}

impl Default for TurretDefinition {
    fn default() -> Self {
        Self {
            name: "laser_turret".to_string(),
            max_health: 100.0,
            detection_range: 12.0,
            laser_range: 20.0,
            laser_damage: 15.0,
            attack_cooldown: 2.0,
            beam_duration: 0.25,
            shield_duration: 2.5,
            shield_cooldown: 6.0,
            shield_damage_reduction: 0.7,
            death_delay: 2.0,
            hit_radius: 0.5,
            reward_amount: Some(10),
        }
    }
}

impl TurretDefinition {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_positive(&self.name, "max_health", self.max_health)?;
        validate_positive(&self.name, "detection_range", self.detection_range)?;
        validate_positive(&self.name, "laser_range", self.laser_range)?;
        validate_positive(&self.name, "laser_damage", self.laser_damage)?;
        validate_positive(&self.name, "attack_cooldown", self.attack_cooldown)?;
        validate_positive(&self.name, "beam_duration", self.beam_duration)?;
        validate_positive(&self.name, "shield_duration", self.shield_duration)?;
        validate_positive(&self.name, "shield_cooldown", self.shield_cooldown)?;
        validate_fraction(
            &self.name,
            "shield_damage_reduction",
            self.shield_damage_reduction,
        )?;
        Ok(())
    }

    fn stats(&self) -> TurretStats {
        TurretStats {
            laser_range: self.laser_range,
            laser_damage: self.laser_damage,
            attack_cooldown: self.attack_cooldown,
            beam_duration: self.beam_duration,
            shield_duration: self.shield_duration,
            shield_cooldown: self.shield_cooldown,
        }
    }
}

fn validate_positive(name: &str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            name: name.to_string(),
            field,
            value,
        })
    }
}

fn validate_fraction(name: &str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::FractionOutOfRange {
            name: name.to_string(),
            field,
            value,
        })
    }
}

/// Spawn a boss at `position` walking `patrol` cyclically.
///
/// Fails fast on a malformed definition or an empty patrol route; a valid
/// spawn starts fully healed, idle, with both cooldowns pre-expired, and
/// holds still for `intro_duration` before acting.
pub fn spawn_boss(
    commands: &mut Commands,
    definition: &BossDefinition,
    position: Vec3,
    patrol: Vec<Vec3>,
) -> Result<Entity, ConfigError> {
    definition.validate()?;
    if patrol.is_empty() {
        return Err(ConfigError::EmptyPatrolRoute {
            name: definition.name.clone(),
        });
    }

    let mut entity = commands.spawn((
        Enemy,
        Boss,
        definition.stats(),
        Transform::from_translation(position),
        EnemyState::default(),
        PreviousState::default(),
        Perception {
            detection_range: definition.detection_range,
        },
        Cooldowns::default(),
        Patrol::new(patrol),
        Health::new(definition.max_health),
        ShieldState::new(definition.shield_damage_reduction),
        HitVolume::new(definition.hit_radius),
        DeathDelay(definition.death_delay),
    ));

    if definition.intro_duration > 0.0 {
        entity.insert(IntroDelay {
            remaining: definition.intro_duration,
        });
    }
    if let Some(amount) = definition.reward_amount {
        entity.insert(RewardDrop { amount });
    }

    Ok(entity.id())
}

/// Spawn a turret at `position`.
pub fn spawn_turret(
    commands: &mut Commands,
    definition: &TurretDefinition,
    position: Vec3,
) -> Result<Entity, ConfigError> {
    definition.validate()?;

    let mut entity = commands.spawn((
        Enemy,
        Turret,
        definition.stats(),
        Transform::from_translation(position),
        EnemyState::default(),
        PreviousState::default(),
        Perception {
            detection_range: definition.detection_range,
        },
        Cooldowns::default(),
        Health::new(definition.max_health),
        ShieldState::new(definition.shield_damage_reduction),
        HitVolume::new(definition.hit_radius),
        DeathDelay(definition.death_delay),
    ));

    if let Some(amount) = definition.reward_amount {
        entity.insert(RewardDrop { amount });
    }
    Ok(entity.id())
}

/// Seconds to keep the corpse around before despawning.
#[derive(Component, Debug)]
pub struct DeathDelay(pub f32);

/// Resource holding all loaded adversary definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub bosses: HashMap<String, BossDefinition>,
    pub turrets: HashMap<String, TurretDefinition>,
}

/// One definition file: either variant, tagged in RON.
#[derive(Deserialize, Clone, Debug)]
pub enum AdversaryDefinition {
    Boss(BossDefinition),
    Turret(TurretDefinition),
}

impl EnemyRegistry {
    /// Load every `.ron` definition under `dir`, validating each one.
    ///
    /// Any unreadable, unparsable, or invalid definition aborts the load -
    /// a bad config file is a construction-time error, not something to
    /// limp past and fault per-tick.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::default();

        let entries = fs::read_dir(dir).map_err(|e| ConfigError::ReadError {
            path: dir.display().to_string(),
            details: e.to_string(),
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let contents = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;
            let definition: AdversaryDefinition =
                ron::from_str(&contents).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    details: e.to_string(),
                })?;

            match definition {
                AdversaryDefinition::Boss(boss) => {
                    boss.validate()?;
                    info!("loaded boss definition '{}'", boss.name);
                    registry.bosses.insert(boss.name.clone(), boss);
                }
                AdversaryDefinition::Turret(turret) => {
                    turret.validate()?;
                    info!("loaded turret definition '{}'", turret.name);
                    registry.turrets.insert(turret.name.clone(), turret);
                }
            }
        }

        Ok(registry)
    }
}

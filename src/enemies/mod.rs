//! Adversary behavior: components, AI systems, and configuration data.

mod ai;
mod components;
mod data;
mod error;
mod locomotion;
mod plugin;
mod signals;
mod targeting;
mod turret;

pub use components::*;
pub use data::{
    spawn_boss, spawn_turret, AdversaryDefinition, BossDefinition, DeathDelay, EnemyRegistry,
    TurretDefinition,
};
pub use error::ConfigError;
pub use plugin::EnemyPlugin;
pub use signals::{PreviousState, StateChanged};

//! Combat module - health, shields, and damage/heal application.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use systems::{mitigated_damage, tick_invincibility};

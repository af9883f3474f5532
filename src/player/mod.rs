//! Player-side shim.
//!
//! The core treats the player as an external collaborator: a position, a
//! hit volume on the target layer, and the shared damage-receiving
//! capability. Movement, input, and camera live outside this crate.

mod components;
mod plugin;

pub use components::*;
pub use plugin::PlayerPlugin;

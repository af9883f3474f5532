//! Decision randomness.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RNG used for probabilistic combat decisions (the boss block roll).
///
/// Owned explicitly as a resource rather than reaching for thread-local
/// randomness, so tests can seed it and replay decisions deterministically.
#[derive(Resource)]
pub struct DecisionRng(StdRng);

impl DecisionRng {
    /// Fixed-seed RNG for deterministic runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Draw a uniform value in `[0, 1)`.
    pub fn roll(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

impl Default for DecisionRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

//! Error types for adversary configuration.

use thiserror::Error;

/// Errors raised when validating or loading adversary definitions.
///
/// Configuration problems fail fast at load/spawn time; nothing in the
/// per-tick systems ever surfaces one of these.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boss was spawned with no patrol waypoints.
    #[error("Patrol route for '{name}' is empty")]
    EmptyPatrolRoute { name: String },

    /// A probability or fraction field left `[0, 1]`.
    #[error("Field '{field}' of '{name}' must be within [0, 1], got {value}")]
    FractionOutOfRange {
        name: String,
        field: &'static str,
        value: f32,
    },

    /// A range, speed, damage, or duration that must be positive was not.
    #[error("Field '{field}' of '{name}' must be positive, got {value}")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f32,
    },

    /// Definition file could not be read.
    #[error("Failed to read definition file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

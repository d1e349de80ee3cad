//! Build errors for machine assembly.

use crate::config::ConfigError;
use thiserror::Error;

/// A single problem found while validating a machine's schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("No states declared")]
    NoStates,

    #[error("No events declared")]
    NoEvents,

    #[error("State {state} is declared more than once")]
    DuplicateState { state: String },

    #[error("Event {event} is declared more than once")]
    DuplicateEvent { event: String },

    #[error("State {state} overrides event {event}, which is not in the declared event set")]
    UndeclaredEvent { state: String, event: String },

    #[error("State {state} overrides event {event} more than once")]
    DuplicateOverride { state: String, event: String },

    #[error("State {state} transitions to {target} on {event}, which is not a declared state")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("State {state} declares an empty OneOf on {event}")]
    EmptyChoice { state: String, event: String },
}

/// Errors that can occur when assembling a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Schema validation failed: {}", list(.0))]
    Schema(Vec<SchemaViolation>),

    #[error("Initial state {0} is not a declared state")]
    UnknownInitialState(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BuildError {
    /// Violations reported by schema validation, if that is what failed.
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            BuildError::Schema(violations) => violations,
            BuildError::UnknownInitialState(_) | BuildError::Config(_) => &[],
        }
    }
}

fn list(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
